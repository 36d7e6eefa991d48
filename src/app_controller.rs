use anyhow::{Result, anyhow};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::file_utils::{FileManager, OUTPUT_SUFFIX};
use crate::subtitle_document::SubtitleDocument;
use crate::transliteration::{ChunkTransliterator, ConversionOutcome, ConversionPipeline, TransliterationService};

// @module: Application controller for subtitle conversion

/// Main application controller for Hinglish subtitle conversion
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        self.config.conversion.max_blocks_per_chunk >= 1
    }

    /// Run the main workflow with an input subtitle file and output directory
    pub async fn run(&self, input_file: PathBuf, output_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        let multi_progress = MultiProgress::new();
        self.run_with_progress(input_file, output_dir, &multi_progress, force_overwrite).await
    }

    /// Run the controller with progress reporting
    async fn run_with_progress(
        &self,
        input_file: PathBuf,
        output_dir: PathBuf,
        multi_progress: &MultiProgress,
        force_overwrite: bool,
    ) -> Result<()> {
        let start_time = std::time::Instant::now();

        if !input_file.exists() {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }
        if !FileManager::is_subtitle_file(&input_file) {
            return Err(anyhow!("Input file is not an SRT subtitle file: {:?}", input_file));
        }

        FileManager::ensure_dir(&output_dir)?;

        // Check if a converted file already exists
        let output_path = FileManager::derive_output_path(&input_file, &output_dir);
        if output_path.exists() && !force_overwrite {
            warn!("Skipping file, converted output already exists (use -f to force overwrite)");
            return Ok(());
        }

        let document = SubtitleDocument::load(&input_file)?;

        info!(
            "hinglify: {} - {}",
            self.config.transliteration.provider.display_name(),
            self.config.transliteration.get_model()
        );

        let service = TransliterationService::new(self.config.transliteration.clone())?;
        let outcome = self.convert_document(&document, &service, multi_progress).await;

        self.finish_conversion(outcome, &output_path)?;

        let elapsed = start_time.elapsed();
        info!("Converted {:?} in {:.1}s", input_file.file_name().unwrap_or_default(), elapsed.as_secs_f64());

        Ok(())
    }

    /// Convert one document through the pipeline, driving a progress bar
    /// from the pipeline's progress callbacks. Generic over the service so
    /// tests can drive the same flow with a deterministic fake.
    pub async fn convert_document<S>(
        &self,
        document: &SubtitleDocument,
        service: &S,
        multi_progress: &MultiProgress,
    ) -> ConversionOutcome
    where
        S: ChunkTransliterator + ?Sized,
    {
        // The bar tracks percent; the pipeline reports fractions in [0, 1]
        let progress_bar = multi_progress.add(ProgressBar::new(100));
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {percent}% {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {percent}% {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar.set_message("Converting");

        let pipeline = ConversionPipeline::new(self.config.conversion.max_blocks_per_chunk);

        let pb = progress_bar.clone();
        let outcome = pipeline
            .run(&document.text, service, move |fraction| {
                pb.set_position((fraction * 100.0).round() as u64);
            })
            .await;

        // Finish and clear so only the folder progress bar stays visible
        // when processing multiple files
        progress_bar.finish_and_clear();

        outcome
    }

    /// Persist a finished run: the full document on success, or whatever
    /// partial output survived next to the target on failure
    fn finish_conversion(&self, outcome: ConversionOutcome, output_path: &Path) -> Result<()> {
        match outcome.error {
            None => {
                FileManager::write_to_file(output_path, &outcome.output)?;
                info!("Success: {:?}", output_path);
                Ok(())
            }
            Some(err) => {
                if !outcome.output.is_empty() {
                    let partial_path = PathBuf::from(format!("{}.partial", output_path.display()));
                    if let Err(write_err) = FileManager::write_to_file(&partial_path, &outcome.output) {
                        warn!("Failed to save partial output: {}", write_err);
                    } else {
                        warn!(
                            "Saved partial output of {} of {} chunks to {:?}",
                            outcome.completed_chunks, outcome.total_chunks, partial_path
                        );
                    }
                }
                error!("Conversion failed: {}", err);
                Err(anyhow::Error::new(err))
            }
        }
    }

    /// Process every SRT file in a directory
    pub async fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        if !FileManager::dir_exists(&input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let subtitle_files: Vec<PathBuf> = FileManager::find_files(&input_dir, "srt")?
            .into_iter()
            .filter(|path| {
                // Skip files that are themselves conversion outputs
                path.file_stem()
                    .map(|stem| !stem.to_string_lossy().ends_with(OUTPUT_SUFFIX))
                    .unwrap_or(true)
            })
            .collect();

        if subtitle_files.is_empty() {
            warn!("No subtitle files found in directory: {:?}", input_dir);
            return Ok(());
        }

        info!("Found {} subtitle file(s) to convert", subtitle_files.len());

        // Folder-level progress bar above the per-file bars
        let multi_progress = MultiProgress::new();
        let folder_pb = multi_progress.add(ProgressBar::new(subtitle_files.len() as u64));
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.green/white}] {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));

        let mut failed_count = 0;
        for subtitle_file in &subtitle_files {
            folder_pb.set_message(
                subtitle_file
                    .file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_default(),
            );

            let output_dir = subtitle_file
                .parent()
                .unwrap_or(Path::new("."))
                .to_path_buf();

            if let Err(e) = self
                .run_with_progress(subtitle_file.clone(), output_dir, &multi_progress, force_overwrite)
                .await
            {
                error!("Error converting {:?}: {}", subtitle_file, e);
                failed_count += 1;
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_and_clear();

        if failed_count > 0 {
            warn!(
                "Finished with {} of {} files failed",
                failed_count,
                subtitle_files.len()
            );
        } else {
            info!("Finished converting {} file(s)", subtitle_files.len());
        }

        Ok(())
    }
}
