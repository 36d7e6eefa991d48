/*!
 * Tests for the chunked conversion pipeline
 */

use hinglify::providers::mock::MockTransliterator;
use hinglify::subtitle_document::BLOCK_SEPARATOR;
use hinglify::transliteration::ConversionPipeline;

/// Build a document of `n` numbered blocks joined canonically
fn document_with_blocks(n: usize) -> String {
    (1..=n)
        .map(|i| format!("{}\n00:00:0{},000 --> 00:00:0{},500\nपंक्ति {}", i, i % 10, i % 10, i))
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

/// Test that a successful run converts every chunk and joins with one separator
#[tokio::test]
async fn test_run_withTwoChunks_shouldJoinOutputsWithSingleSeparator() {
    let service = MockTransliterator::working().with_custom_response(|_| "converted".to_string());
    let pipeline = ConversionPipeline::new(2);
    let document = document_with_blocks(3);

    let outcome = pipeline.run(&document, &service, |_| {}).await;

    assert!(outcome.is_success());
    assert_eq!(outcome.total_chunks, 2);
    assert_eq!(outcome.completed_chunks, 2);
    assert_eq!(outcome.output, format!("converted{}converted", BLOCK_SEPARATOR));
    assert_eq!(service.calls(), 2);
}

/// Test that a single-chunk run returns the service output unmodified
#[tokio::test]
async fn test_run_withSingleChunk_shouldReturnServiceOutputVerbatim() {
    let service = MockTransliterator::working()
        .with_custom_response(|_| "1\n00:00:01,000 --> 00:00:02,000\nNamaste".to_string());
    let pipeline = ConversionPipeline::new(50);
    let document = document_with_blocks(3);

    let outcome = pipeline.run(&document, &service, |_| {}).await;

    assert!(outcome.is_success());
    assert_eq!(outcome.total_chunks, 1);
    assert_eq!(outcome.output, "1\n00:00:01,000 --> 00:00:02,000\nNamaste");
}

/// Test the exact partial-failure contract: output from completed chunks
/// only, nothing from the failing chunk or beyond, and no further dispatch
#[tokio::test]
async fn test_run_withFailureOnSecondChunk_shouldKeepFirstChunkOutputOnly() {
    let service = MockTransliterator::fail_on_call(2).with_custom_response(|_| "ok".to_string());
    let pipeline = ConversionPipeline::new(2);
    // 5 blocks with a bound of 2 assemble into 3 chunks
    let document = document_with_blocks(5);

    let outcome = pipeline.run(&document, &service, |_| {}).await;

    assert!(!outcome.is_success());
    assert!(outcome.is_partial_failure());
    assert_eq!(outcome.total_chunks, 3);
    assert_eq!(outcome.completed_chunks, 1);
    assert_eq!(outcome.output, "ok");

    let error = outcome.error.unwrap();
    assert_eq!(error.chunk_index(), 2);

    // The third chunk must never have been dispatched
    assert_eq!(service.calls(), 2);
}

/// Test that a failure on the very first chunk leaves empty output
#[tokio::test]
async fn test_run_withFailureOnFirstChunk_shouldReturnEmptyOutput() {
    let service = MockTransliterator::failing();
    let pipeline = ConversionPipeline::new(50);
    let document = document_with_blocks(2);

    let outcome = pipeline.run(&document, &service, |_| {}).await;

    assert!(!outcome.is_success());
    assert!(!outcome.is_partial_failure());
    assert_eq!(outcome.completed_chunks, 0);
    assert!(outcome.output.is_empty());
    assert_eq!(service.calls(), 1);
}

/// Test that an empty document succeeds trivially with zero service calls
/// and zero progress callbacks
#[tokio::test]
async fn test_run_withEmptyDocument_shouldSucceedWithoutServiceCalls() {
    let service = MockTransliterator::working();
    let pipeline = ConversionPipeline::new(50);

    let mut callbacks = 0;
    let outcome = pipeline.run("   \n\n  ", &service, |_| callbacks += 1).await;

    assert!(outcome.is_success());
    assert_eq!(outcome.total_chunks, 0);
    assert!(outcome.output.is_empty());
    assert_eq!(service.calls(), 0);
    assert_eq!(callbacks, 0);
    // A run with nothing to do is complete
    assert_eq!(outcome.progress(), 1.0);
}

/// Test the exact progress sequence for a three-chunk run
#[tokio::test]
async fn test_run_withThreeChunks_shouldReportProgressAfterEachChunk() {
    let service = MockTransliterator::working();
    let pipeline = ConversionPipeline::new(2);
    let document = document_with_blocks(6);

    let mut fractions = Vec::new();
    let outcome = pipeline.run(&document, &service, |f| fractions.push(f)).await;

    assert!(outcome.is_success());
    assert_eq!(fractions.len(), 3);
    assert!((fractions[0] - 1.0 / 3.0).abs() < 1e-9);
    assert!((fractions[1] - 2.0 / 3.0).abs() < 1e-9);
    assert_eq!(fractions[2], 1.0);
}

/// Test a typical feature-length document: 120 blocks with the default
/// bound of 50 convert as three chunks with thirds progress
#[tokio::test]
async fn test_run_withLargeDocumentAndDefaultBound_shouldConvertInThreeChunks() {
    let service = MockTransliterator::working();
    let pipeline = ConversionPipeline::new(50);
    let document = document_with_blocks(120);

    let mut fractions = Vec::new();
    let outcome = pipeline.run(&document, &service, |f| fractions.push(f)).await;

    assert!(outcome.is_success());
    assert_eq!(outcome.total_chunks, 3);
    assert_eq!(service.calls(), 3);
    assert!((fractions[0] - 1.0 / 3.0).abs() < 1e-9);
    assert_eq!(*fractions.last().unwrap(), 1.0);
}

/// Test that progress is monotone non-decreasing and ends at exactly 1.0
#[tokio::test]
async fn test_run_withManyChunks_shouldReportMonotoneProgressEndingAtOne() {
    let service = MockTransliterator::working();
    let pipeline = ConversionPipeline::new(1);
    let document = document_with_blocks(17);

    let mut fractions = Vec::new();
    let outcome = pipeline.run(&document, &service, |f| fractions.push(f)).await;

    assert!(outcome.is_success());
    assert_eq!(fractions.len(), 17);
    assert!(fractions.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*fractions.last().unwrap(), 1.0);
}

/// Test that on failure no progress is reported for the failing chunk
#[tokio::test]
async fn test_run_withMidRunFailure_shouldNotReportProgressForFailedChunk() {
    let service = MockTransliterator::fail_on_call(2);
    let pipeline = ConversionPipeline::new(1);
    let document = document_with_blocks(4);

    let mut fractions = Vec::new();
    let outcome = pipeline.run(&document, &service, |f| fractions.push(f)).await;

    assert!(!outcome.is_success());
    assert_eq!(fractions.len(), 1);
    assert!((fractions[0] - 0.25).abs() < 1e-9);
    assert!((outcome.progress() - 0.25).abs() < 1e-9);
}

/// Test that empty chunk responses never introduce stray separators
#[tokio::test]
async fn test_run_withEmptyServiceResponses_shouldProduceEmptyOutput() {
    let service = MockTransliterator::empty();
    let pipeline = ConversionPipeline::new(1);
    let document = document_with_blocks(3);

    let outcome = pipeline.run(&document, &service, |_| {}).await;

    assert!(outcome.is_success());
    assert_eq!(outcome.completed_chunks, 3);
    assert!(outcome.output.is_empty());
}

/// Test that an empty response between two non-empty ones leaves exactly
/// one separator between the surviving outputs
#[tokio::test]
async fn test_run_withEmptyResponseBetweenNonEmptyOnes_shouldSkipItsSeparator() {
    // Chunks carry their block index as the first line; the middle chunk
    // comes back empty
    let service = MockTransliterator::working().with_custom_response(|text| {
        match text.lines().next() {
            Some("2") => String::new(),
            Some(n) => format!("X{}", n),
            None => String::new(),
        }
    });
    let pipeline = ConversionPipeline::new(1);
    let document = document_with_blocks(3);

    let outcome = pipeline.run(&document, &service, |_| {}).await;

    assert!(outcome.is_success());
    assert_eq!(outcome.completed_chunks, 3);
    assert_eq!(outcome.output, format!("X1{}X3", BLOCK_SEPARATOR));
}

/// Test that the output accumulates in original chunk order
#[tokio::test]
async fn test_run_withOrderedChunks_shouldPreserveChunkOrder() {
    // Echo the first line of each chunk so ordering is observable
    let service = MockTransliterator::working()
        .with_custom_response(|text| text.lines().next().unwrap_or("").to_string());
    let pipeline = ConversionPipeline::new(1);
    let document = document_with_blocks(3);

    let outcome = pipeline.run(&document, &service, |_| {}).await;

    assert!(outcome.is_success());
    assert_eq!(outcome.output, format!("1{}2{}3", BLOCK_SEPARATOR, BLOCK_SEPARATOR));
}

/// Test that a zero chunk-size bound is clamped to one block per chunk
#[tokio::test]
async fn test_pipeline_withZeroBound_shouldStillConvertEveryBlock() {
    let service = MockTransliterator::working();
    let pipeline = ConversionPipeline::new(0);
    let document = document_with_blocks(2);

    let outcome = pipeline.run(&document, &service, |_| {}).await;

    assert!(outcome.is_success());
    assert_eq!(outcome.total_chunks, 2);
    assert_eq!(service.calls(), 2);
}
