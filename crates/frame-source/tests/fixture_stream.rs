use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use palmdeck_frame_source::{FrameFeeder, JsonlSource, ObservationSource};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("sample-session")
        .join("frames.jsonl")
}

fn fixture_source() -> JsonlSource<BufReader<File>> {
    let file = File::open(fixture_path()).expect("fixture frames should be readable");
    JsonlSource::new(BufReader::new(file), "fixture")
}

#[test]
fn fixture_stream_reads_header_and_all_frames() {
    let mut source = fixture_source();
    let mut frames = Vec::new();
    while let Some(frame) = source.poll().unwrap() {
        frames.push(frame);
    }

    assert!(source.header().is_some());
    assert_eq!(source.malformed_lines(), 0);
    assert_eq!(frames.len(), 37);
    assert_eq!(frames.iter().filter(|f| f.hand.is_some()).count(), 32);
}

#[tokio::test]
async fn feeder_delivers_fixture_in_capture_order() {
    let mut feeder = FrameFeeder::spawn(Box::new(fixture_source()), 4);
    let mut times = Vec::new();
    while let Some(frame) = feeder.recv().await {
        times.push(frame.t);
    }
    assert_eq!(times.len(), 37);
    assert!(times.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(feeder.join().await, 37);
}
