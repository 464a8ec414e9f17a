mod common;

use common::{FakeSpotify, artist_image_url, context, features, image, raw_track};
use sporlrec::{
    error::Error,
    pipeline::TrackNormalizer,
    types::{AlbumRef, ArtistRef, RawTrack},
    utils::{ARTIST_IMAGE_PLACEHOLDER, COVER_PLACEHOLDER},
};

fn tame_impala() -> RawTrack {
    RawTrack {
        name: "The Less I Know The Better".to_string(),
        uri: "spotify:track:6K4t31amVTZDgR3sKmwUJJ".to_string(),
        popularity: 79,
        artists: vec![
            ArtistRef {
                name: "Tame Impala".to_string(),
                uri: "5INjqkS1o8h1imAzPqGZBb".to_string(),
            },
            ArtistRef {
                name: "Someone Else".to_string(),
                uri: "spotify:artist:other".to_string(),
            },
        ],
        album: AlbumRef {
            name: "Currents".to_string(),
            release_date: "2015-07-17".to_string(),
            images: vec![
                image("https://i.scdn.co/image/ab67616d0000b2739e1cfc756886ac782e363d79"),
                image("https://i.scdn.co/image/small"),
            ],
        },
    }
}

#[tokio::test]
async fn test_normalize_extracts_track_info() {
    let api = FakeSpotify::new();
    let mut normalizer = TrackNormalizer::new(&api);

    let record = normalizer.normalize(&tame_impala(), None).await.unwrap();

    assert_eq!(record.artist_name, "Tame Impala");
    assert_eq!(record.artist_id, "5INjqkS1o8h1imAzPqGZBb");
    assert_eq!(record.artist_image, artist_image_url("5INjqkS1o8h1imAzPqGZBb"));
    assert_eq!(record.track_name, "The Less I Know The Better");
    assert_eq!(record.popularity, 79);
    assert_eq!(record.release_date, "2015-07-17");
    assert_eq!(
        record.album_cover,
        "https://i.scdn.co/image/ab67616d0000b2739e1cfc756886ac782e363d79"
    );
    assert_eq!(record.album_name, "Currents");
    assert_eq!(record.track_id, "6K4t31amVTZDgR3sKmwUJJ");
    assert_eq!(record.features, features());
    assert_eq!(record.playlist, None);
}

#[tokio::test]
async fn test_normalize_looks_up_first_artist_and_bare_track() {
    let api = FakeSpotify::new();
    let mut normalizer = TrackNormalizer::new(&api);

    normalizer.normalize(&tame_impala(), None).await.unwrap();

    let calls = api.calls();
    assert_eq!(calls.len(), 2);
    assert!(matches!(&calls[0], common::Call::Artist(id) if id == "5INjqkS1o8h1imAzPqGZBb"));
    assert!(matches!(&calls[1], common::Call::AudioFeatures(id) if id == "6K4t31amVTZDgR3sKmwUJJ"));
}

#[tokio::test]
async fn test_normalize_track_id_never_keeps_scheme() {
    let api = FakeSpotify::new();
    let mut normalizer = TrackNormalizer::new(&api);

    for uri in [
        "spotify:track:abc123",
        "spotify:local:artist:album:abc123",
        "abc123",
    ] {
        let mut raw = raw_track("abc123", 10);
        raw.uri = uri.to_string();
        let record = normalizer.normalize(&raw, None).await.unwrap();
        assert_eq!(record.track_id, "abc123");
        assert!(!record.track_id.contains(':'));
    }
}

#[tokio::test]
async fn test_normalize_attaches_playlist_context() {
    let api = FakeSpotify::new();
    let mut normalizer = TrackNormalizer::new(&api);
    let playlist = context("Random Playlist");

    let record = normalizer
        .normalize(&tame_impala(), Some(&playlist))
        .await
        .unwrap();

    assert_eq!(record.playlist, Some(playlist));
}

#[tokio::test]
async fn test_artist_without_image_gets_placeholder() {
    let mut api = FakeSpotify::new();
    api.artists_without_images
        .insert("5INjqkS1o8h1imAzPqGZBb".to_string());
    let mut normalizer = TrackNormalizer::new(&api);

    let record = normalizer.normalize(&tame_impala(), None).await.unwrap();

    assert_eq!(record.artist_image, ARTIST_IMAGE_PLACEHOLDER);
}

#[tokio::test]
async fn test_album_without_image_gets_placeholder() {
    let api = FakeSpotify::new();
    let mut normalizer = TrackNormalizer::new(&api);
    let mut raw = tame_impala();
    raw.album.images.clear();

    let record = normalizer.normalize(&raw, None).await.unwrap();

    assert_eq!(record.album_cover, COVER_PLACEHOLDER);
}

#[tokio::test]
async fn test_missing_audio_features_is_fatal() {
    let mut api = FakeSpotify::new();
    api.tracks_without_features
        .insert("6K4t31amVTZDgR3sKmwUJJ".to_string());
    let mut normalizer = TrackNormalizer::new(&api);

    let err = normalizer.normalize(&tame_impala(), None).await.unwrap_err();

    assert!(matches!(err, Error::MissingAudioFeatures(id) if id == "6K4t31amVTZDgR3sKmwUJJ"));
}

#[tokio::test]
async fn test_track_without_artists_is_fatal() {
    let api = FakeSpotify::new();
    let mut normalizer = TrackNormalizer::new(&api);
    let mut raw = tame_impala();
    raw.artists.clear();

    let err = normalizer.normalize(&raw, None).await.unwrap_err();

    assert!(matches!(err, Error::Payload(_)));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_cache_only_changes_call_volume() {
    let mut first = raw_track("a", 10);
    let mut second = raw_track("b", 20);
    first.artists[0].uri = "spotify:artist:shared".to_string();
    second.artists[0].uri = "spotify:artist:shared".to_string();
    let tracks = [first, second.clone(), second];

    let cached_api = FakeSpotify::new();
    let mut cached = TrackNormalizer::new(&cached_api);
    let mut cached_records = Vec::new();
    for raw in &tracks {
        cached_records.push(cached.normalize(raw, None).await.unwrap());
    }

    let uncached_api = FakeSpotify::new();
    let mut uncached = TrackNormalizer::without_cache(&uncached_api);
    let mut uncached_records = Vec::new();
    for raw in &tracks {
        uncached_records.push(uncached.normalize(raw, None).await.unwrap());
    }

    assert_eq!(cached_records, uncached_records);
    assert_eq!(cached_api.artist_calls(), 1);
    assert_eq!(cached_api.calls().len(), 3);
    assert_eq!(uncached_api.artist_calls(), 3);
    assert_eq!(uncached_api.calls().len(), 6);
}
