use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::editor::Editor;
use crate::element::ShapeId;
use crate::error::{MarkupError, MarkupResult};

/// File extensions listed as openable images
pub const IMAGE_EXTENSIONS: [&str; 8] = ["png", "jpg", "jpeg", "bmp", "gif", "webp", "tif", "tiff"];

fn is_image_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Input and output folders, the images available for markup, and which one is being worked on
#[derive(Debug, Default)]
pub struct Workspace {
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    files: Vec<String>,
    working_image: Option<String>,
    /// Shape ids on the surface at the last successful save or open
    saved_snapshot: Vec<ShapeId>,
}

impl Workspace {
    pub fn new(input_dir: Option<PathBuf>, output_dir: Option<PathBuf>) -> Self {
        let mut workspace = Self {
            output_dir,
            ..Self::default()
        };
        workspace.select_input_dir(input_dir);
        workspace
    }

    pub fn input_dir(&self) -> Option<&Path> {
        self.input_dir.as_deref()
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    /// Image file names in the input directory, sorted
    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn working_image(&self) -> Option<&str> {
        self.working_image.as_deref()
    }

    /// Point at a new input directory. `None` (a cancelled picker) changes nothing.
    pub fn select_input_dir(&mut self, dir: Option<PathBuf>) {
        let Some(dir) = dir else {
            return;
        };
        log::info!("Input directory: {}", dir.display());
        self.input_dir = Some(dir);
        if let Err(err) = self.refresh_files() {
            log::error!("Failed to list input directory: {}", err);
            self.files.clear();
        }
    }

    /// Point at a new output directory. `None` (a cancelled picker) changes nothing.
    pub fn select_output_dir(&mut self, dir: Option<PathBuf>) {
        if let Some(dir) = dir {
            log::info!("Output directory: {}", dir.display());
            self.output_dir = Some(dir);
        }
    }

    /// Re-read the input directory
    pub fn refresh_files(&mut self) -> MarkupResult<()> {
        let Some(dir) = &self.input_dir else {
            self.files.clear();
            return Ok(());
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() || !is_image_file(&path) {
                continue;
            }
            if let Some(name) = path.file_name() {
                files.push(name.to_string_lossy().into_owned());
            }
        }
        files.sort();
        log::debug!("Found {} images in {}", files.len(), dir.display());
        self.files = files;
        Ok(())
    }

    /// Load the `index`-th file as the editor's background, starting a fresh session
    pub fn open(&mut self, index: usize, editor: &mut Editor) -> MarkupResult<()> {
        let name = self
            .files
            .get(index)
            .ok_or(MarkupError::FileIndexOutOfRange {
                index,
                len: self.files.len(),
            })?
            .clone();
        let dir = self.input_dir.as_deref().unwrap_or(Path::new("."));
        let path = dir.join(&name);

        log::info!("Reading image from {}", path.display());
        let image = image::open(&path)?.to_rgba8();
        editor.load_background(image);

        self.working_image = Some(name);
        self.saved_snapshot = editor.surface().shape_ids();
        Ok(())
    }

    /// Write the shape mask as a PNG named after the working image.
    ///
    /// Returns `Ok(None)` when no image has been opened.
    pub fn save(&mut self, editor: &Editor) -> MarkupResult<Option<PathBuf>> {
        let Some(name) = &self.working_image else {
            log::warn!("Working image is unknown, skipping save");
            return Ok(None);
        };
        let dir = self.output_dir.as_ref().ok_or(MarkupError::NoOutputDirectory)?;
        let mask = editor
            .surface()
            .flatten_to_mask()
            .ok_or(MarkupError::NoImageLoaded)?;

        let stem = Path::new(name)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| name.clone());
        let out_path = dir.join(format!("{stem}.png"));

        log::info!("Saving mask to {}", out_path.display());
        mask.save_with_format(&out_path, ImageFormat::Png)?;
        self.saved_snapshot = editor.surface().shape_ids();
        Ok(Some(out_path))
    }

    /// True if the shapes on the surface differ from those last saved or opened
    pub fn has_unsaved_changes(&self, editor: &Editor) -> bool {
        self.working_image.is_some() && editor.surface().shape_ids() != self.saved_snapshot
    }
}
