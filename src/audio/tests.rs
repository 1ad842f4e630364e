use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use flume::Receiver;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use super::{
    error::AudioError,
    fake::{FakeEngine, FakeSink},
    probe::{DurationProbe, HttpDurationProbe, decode_duration},
    state::{PlaybackState, next_in_view, previous_in_view},
    system::AudioSystem,
};
use crate::{
    catalog::Song,
    config::{ApiConfig, AudioConfig},
    event::events::Event,
    http::ApiService,
};

fn system() -> (AudioSystem, Rc<FakeSink>, Receiver<Event>) {
    let sink = Rc::new(FakeSink::default());
    let (tx, rx) = flume::unbounded();
    let api = Arc::new(ApiService::new(&ApiConfig::default()).unwrap());
    let system = AudioSystem::new(
        Box::new(FakeEngine(sink.clone())),
        tx,
        api,
        &AudioConfig::default(),
    );
    (system, sink, rx)
}

fn song(index: usize) -> Song {
    Song {
        index,
        name: format!("Song {index}"),
        artist: "Artist".into(),
        // nothing listens on port 1, so downloads fail fast
        url: format!("http://127.0.0.1:1/{index}.mp3"),
        cover_url: String::new(),
        accent: "#331E00".into(),
        duration_seconds: Some(100.0),
        top_track: false,
    }
}

/// Selects `index`, optionally starts playback, and loads fake audio.
fn loaded(system: &mut AudioSystem, index: usize, play: bool) {
    system.select(&song(index));
    if play {
        system.play_pause();
    }
    assert!(system.on_track_fetched(system.generation(), Vec::new()));
}

fn wav(seconds: f64, rate: u32) -> Vec<u8> {
    let samples = (seconds * rate as f64) as u32;
    let data_len = samples * 2;
    let mut out = Vec::with_capacity(44 + data_len as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&1u16.to_le_bytes()); // mono
    out.extend_from_slice(&rate.to_le_bytes());
    out.extend_from_slice(&(rate * 2).to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes());
    out.extend_from_slice(&16u16.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    out.resize(out.len() + data_len as usize, 0);
    out
}

#[test]
fn next_wraps_to_first_entry() {
    // catalog [A, B, C], C current
    assert_eq!(next_in_view(&[0, 1, 2], Some(2)), Some(0));
    assert_eq!(next_in_view(&[0, 1, 2], Some(0)), Some(1));
}

#[test]
fn previous_wraps_to_last_entry() {
    assert_eq!(previous_in_view(&[0, 1, 2], Some(0)), Some(2));
    assert_eq!(previous_in_view(&[0, 1, 2], Some(2)), Some(1));
}

#[test]
fn navigation_follows_filtered_view_order() {
    let view = [1, 4, 7];
    assert_eq!(next_in_view(&view, Some(4)), Some(7));
    assert_eq!(next_in_view(&view, Some(7)), Some(1));
    assert_eq!(previous_in_view(&view, Some(1)), Some(7));
    assert_eq!(next_in_view(&[3], Some(3)), Some(3));
}

#[test]
fn navigation_from_outside_view_enters_at_the_ends() {
    let view = [1, 4, 7];
    assert_eq!(next_in_view(&view, Some(2)), Some(1));
    assert_eq!(previous_in_view(&view, Some(2)), Some(7));
}

#[test]
fn navigation_without_selection_or_entries_is_a_no_op() {
    assert_eq!(next_in_view(&[0, 1], None), None);
    assert_eq!(previous_in_view(&[0, 1], None), None);
    assert_eq!(next_in_view(&[], Some(0)), None);
    assert_eq!(previous_in_view(&[], Some(0)), None);
}

#[test]
fn state_transitions() {
    let mut state = PlaybackState::default();
    assert!(!state.toggle());
    assert_eq!(state, PlaybackState::Idle);

    state.select(3);
    assert_eq!(state, PlaybackState::Paused(3));
    assert!(state.toggle());
    assert_eq!(state, PlaybackState::Playing(3));

    state.select(5);
    assert_eq!(state, PlaybackState::Paused(5));
    assert_eq!(state.current(), Some(5));
}

#[tokio::test]
async fn play_pause_without_selection_is_ignored() {
    let (mut system, sink, _rx) = system();
    system.play_pause();
    assert_eq!(system.state(), PlaybackState::Idle);
    assert!(!sink.playing.get());
}

#[tokio::test]
async fn selection_lands_paused_and_stops_previous_output() {
    let (mut system, sink, _rx) = system();
    loaded(&mut system, 0, true);
    assert!(sink.playing.get());

    system.select(&song(1));
    assert_eq!(system.state(), PlaybackState::Paused(1));
    assert!(!system.is_loaded());
    assert!(!sink.playing.get());
    assert_eq!(sink.stops.get(), 2);
    assert_eq!(system.track_progress().total_secs(), 100.0);
}

#[tokio::test]
async fn fetched_audio_plays_only_when_requested() {
    let (mut system, sink, _rx) = system();

    loaded(&mut system, 0, false);
    assert!(system.is_loaded());
    assert!(!sink.playing.get());

    loaded(&mut system, 1, true);
    assert!(sink.playing.get());
    assert_eq!(system.state(), PlaybackState::Playing(1));
}

#[tokio::test]
async fn stale_downloads_are_dropped() {
    let (mut system, sink, _rx) = system();
    system.select(&song(0));
    let stale = system.generation();
    system.select(&song(1));

    assert!(!system.on_track_fetched(stale, Vec::new()));
    assert_eq!(sink.loads.get(), 0);
    assert!(system.on_track_fetched(system.generation(), Vec::new()));
    assert_eq!(sink.loads.get(), 1);
}

#[tokio::test]
async fn download_failure_keeps_selection_paused() {
    let (mut system, _sink, rx) = system();
    system.select(&song(2));
    system.play_pause();

    match rx.recv_async().await.unwrap() {
        Event::TrackFetchFailed { generation, error } => {
            system.on_track_fetch_failed(generation, &error);
        }
        other => panic!("unexpected event {other:?}"),
    }

    assert_eq!(system.state(), PlaybackState::Paused(2));
    assert!(!system.is_loaded());
}

#[tokio::test]
async fn decode_failure_pauses() {
    let (mut system, sink, _rx) = system();
    sink.fail_decode.set(true);
    system.select(&song(0));
    system.play_pause();

    assert!(!system.on_track_fetched(system.generation(), Vec::new()));
    assert_eq!(system.state(), PlaybackState::Paused(0));
}

#[tokio::test]
async fn drained_track_emits_track_ended_once() {
    let (mut system, sink, rx) = system();
    loaded(&mut system, 0, true);

    sink.position.set(Duration::from_secs(42));
    system.poll();
    assert_eq!(system.track_progress().current_secs(), 42.0);
    assert!(!rx.try_iter().any(|e| matches!(e, Event::TrackEnded)));

    sink.finished.set(true);
    system.poll();
    system.poll();
    let ended = rx
        .try_iter()
        .filter(|e| matches!(e, Event::TrackEnded))
        .count();
    assert_eq!(ended, 1);
    assert_eq!(system.state(), PlaybackState::Paused(0));
}

#[tokio::test]
async fn focus_loss_pauses_output_and_resumes_only_if_playing() {
    let (mut system, sink, _rx) = system();
    loaded(&mut system, 0, true);

    system.suspend();
    assert!(!sink.playing.get());
    assert!(system.is_playing());

    system.resume();
    assert!(sink.playing.get());

    system.play_pause();
    system.suspend();
    system.resume();
    assert!(!sink.playing.get());
}

#[tokio::test]
async fn volume_is_clamped_and_mute_is_restorable() {
    let (mut system, sink, _rx) = system();
    assert_eq!(sink.volume.get(), 1.0);

    system.set_volume(1.7);
    assert_eq!(system.volume(), 1.0);
    system.volume_down();
    assert!((system.volume() - 0.95).abs() < 1e-6);
    system.set_volume(-0.3);
    assert_eq!(system.volume(), 0.0);

    system.set_volume(0.5);
    system.toggle_mute();
    assert_eq!(sink.volume.get(), 0.0);
    assert_eq!(system.volume(), 0.5);
    system.toggle_mute();
    assert_eq!(sink.volume.get(), 0.5);
}

#[tokio::test]
async fn seeking_is_clamped_to_the_track() {
    let (mut system, sink, _rx) = system();
    sink.total.set(Some(Duration::from_secs(120)));

    system.seek_to(30.0);
    assert_eq!(sink.position.get(), Duration::ZERO);

    loaded(&mut system, 0, true);
    assert_eq!(system.track_progress().total_secs(), 120.0);

    system.seek_to(500.0);
    assert_eq!(sink.position.get(), Duration::from_secs(120));

    system.seek_to(2.0);
    system.seek_backwards();
    assert_eq!(sink.position.get(), Duration::ZERO);

    system.seek_forwards();
    assert_eq!(sink.position.get(), Duration::from_secs(5));

    system.seek_to_ratio(0.5);
    assert_eq!(sink.position.get(), Duration::from_secs(60));
}

#[test]
fn decodes_wav_duration() {
    let seconds = decode_duration(wav(1.0, 8000)).unwrap();
    assert!((seconds - 1.0).abs() < 0.01, "got {seconds}");
}

#[test]
fn undecodable_bytes_are_a_decoding_error() {
    let garbage = vec![0x42u8; 2048];
    assert!(matches!(
        decode_duration(garbage),
        Err(AudioError::DecodingError(_))
    ));
}

async fn serve_bytes(body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let head = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: audio/wav\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
            body.len()
        );
        let _ = socket.write_all(head.as_bytes()).await;
        let _ = socket.write_all(&body).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}/track.wav")
}

#[tokio::test]
async fn http_probe_reads_remote_duration() {
    let url = serve_bytes(wav(0.5, 8000)).await;
    let api = Arc::new(ApiService::new(&ApiConfig::default()).unwrap());
    let probe = HttpDurationProbe::new(api, Duration::from_secs(5));

    let seconds = probe.probe(&url).await.unwrap();
    assert!((seconds - 0.5).abs() < 0.01, "got {seconds}");
}

#[tokio::test]
async fn http_probe_gives_up_after_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(30)).await;
        drop(socket);
    });

    let api = Arc::new(ApiService::new(&ApiConfig::default()).unwrap());
    let probe = HttpDurationProbe::new(api, Duration::from_millis(200));

    assert!(matches!(
        probe.probe(&format!("http://{addr}/hang.mp3")).await,
        Err(AudioError::ProbeTimeout(_))
    ));
}

#[tokio::test]
async fn http_probe_reports_network_errors() {
    let api = Arc::new(ApiService::new(&ApiConfig::default()).unwrap());
    let probe = HttpDurationProbe::new(api, Duration::from_secs(5));

    assert!(matches!(
        probe.probe("http://127.0.0.1:1/missing.mp3").await,
        Err(AudioError::NetworkError(_))
    ));
}
