/*!
 * End-to-end conversion workflow tests driving the controller with a
 * deterministic service fake
 */

use indicatif::MultiProgress;
use tokio_test;
use hinglify::app_config::Config;
use hinglify::app_controller::Controller;
use hinglify::file_utils::FileManager;
use hinglify::providers::mock::MockTransliterator;
use hinglify::subtitle_document::{BLOCK_SEPARATOR, SubtitleDocument};
use crate::common;

/// Test that a freshly built controller is ready to run
#[test]
fn test_controller_creation_withDefaults_shouldBeInitialized() {
    let controller = Controller::new_for_test().unwrap();
    assert!(controller.is_initialized());
}

/// Test the full file-to-output flow with a working service
#[tokio::test]
async fn test_convert_document_withWorkingService_shouldConvertWholeFile() {
    let temp_dir = common::create_temp_dir().unwrap();
    let input = common::create_hindi_subtitle(&temp_dir.path().to_path_buf(), "movie.srt").unwrap();

    let controller = Controller::new_for_test().unwrap();
    let document = SubtitleDocument::load(&input).unwrap();
    let service = MockTransliterator::working();

    let outcome = controller
        .convert_document(&document, &service, &MultiProgress::new())
        .await;

    assert!(outcome.is_success());
    assert_eq!(outcome.total_chunks, 1);
    assert!(outcome.output.contains("[HINGLISH]"));
    assert!(outcome.output.contains(common::sample_hindi_srt()));

    // Persist the result the way the application does and read it back
    let output_path = FileManager::derive_output_path(&input, temp_dir.path());
    FileManager::write_to_file(&output_path, &outcome.output).unwrap();
    assert_eq!(
        output_path.file_name().unwrap().to_string_lossy(),
        "movie_hinglish.srt"
    );
    assert_eq!(FileManager::read_to_string(&output_path).unwrap(), outcome.output);
}

/// Test chunked conversion through the controller with a small chunk bound
#[tokio::test]
async fn test_convert_document_withSmallChunkBound_shouldDispatchPerBlock() {
    let mut config = Config::default();
    config.conversion.max_blocks_per_chunk = 1;

    let temp_dir = common::create_temp_dir().unwrap();
    let input = common::create_hindi_subtitle(&temp_dir.path().to_path_buf(), "movie.srt").unwrap();

    let controller = Controller::with_config(config).unwrap();
    let document = SubtitleDocument::load(&input).unwrap();
    let service = MockTransliterator::working().with_custom_response(|text| text.to_string());

    let outcome = controller
        .convert_document(&document, &service, &MultiProgress::new())
        .await;

    assert!(outcome.is_success());
    assert_eq!(outcome.total_chunks, 3);
    assert_eq!(service.calls(), 3);
    // Identity conversion over per-block chunks reproduces the document
    assert_eq!(outcome.output, common::sample_hindi_srt());
}

/// Test that a mid-run failure surfaces as a partial outcome the
/// application can persist alongside the error
#[tokio::test]
async fn test_convert_document_withMidRunFailure_shouldKeepPartialOutput() {
    let mut config = Config::default();
    config.conversion.max_blocks_per_chunk = 1;

    let temp_dir = common::create_temp_dir().unwrap();
    let input = common::create_hindi_subtitle(&temp_dir.path().to_path_buf(), "movie.srt").unwrap();

    let controller = Controller::with_config(config).unwrap();
    let document = SubtitleDocument::load(&input).unwrap();
    let service = MockTransliterator::fail_on_call(3).with_custom_response(|_| "done".to_string());

    let outcome = controller
        .convert_document(&document, &service, &MultiProgress::new())
        .await;

    assert!(outcome.is_partial_failure());
    assert_eq!(outcome.completed_chunks, 2);
    assert_eq!(outcome.total_chunks, 3);
    assert_eq!(outcome.output, format!("done{}done", BLOCK_SEPARATOR));
    assert_eq!(outcome.error.unwrap().chunk_index(), 3);
}

/// Test that an empty input file converts trivially
#[test]
fn test_convert_document_withEmptyFile_shouldSucceedWithNoOutput() {
    let temp_dir = common::create_temp_dir().unwrap();
    let input = common::create_test_file(&temp_dir.path().to_path_buf(), "empty.srt", "").unwrap();

    let controller = Controller::new_for_test().unwrap();
    let document = SubtitleDocument::load(&input).unwrap();
    let service = MockTransliterator::working();

    let outcome = tokio_test::block_on(async {
        controller
            .convert_document(&document, &service, &MultiProgress::new())
            .await
    });

    assert!(outcome.is_success());
    assert!(outcome.output.is_empty());
    assert_eq!(service.calls(), 0);
}
