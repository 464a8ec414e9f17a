#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use async_trait::async_trait;
use sporlrec::{
    error::Result,
    spotify::SpotifyApi,
    types::{
        AddTrackToPlaylistResponse, AlbumRef, ArtistProfile, ArtistRef, AudioFeatureScores,
        CreatePlaylistRequest, CreatePlaylistResponse, CurrentUser, Image, Paging,
        PlaylistContext, PlaylistTrackItem, PlaylistTracksRef, RawTrack, SimplifiedPlaylist,
        TrackRecord,
    },
};

/// Every request the fake received, in order.
#[derive(Debug, Clone)]
pub enum Call {
    Playlists(u32),
    PlaylistTracks(String),
    Artist(String),
    AudioFeatures(String),
    Recommendations { seeds: Vec<String>, limit: u32 },
    CurrentUser,
    CreatePlaylist {
        user_id: String,
        request: CreatePlaylistRequest,
    },
    AddTracks {
        playlist_id: String,
        uris: Vec<String>,
    },
}

/// In-memory stand-in for the Spotify Web API.
///
/// Artists have one image unless listed in `artists_without_images`; every
/// track has audio features unless listed in `tracks_without_features`;
/// recommendation requests answer with `limit` freshly numbered tracks.
#[derive(Default)]
pub struct FakeSpotify {
    pub playlists: Vec<SimplifiedPlaylist>,
    pub playlist_items: HashMap<String, Vec<PlaylistTrackItem>>,
    pub artists_without_images: HashSet<String>,
    pub tracks_without_features: HashSet<String>,
    calls: Mutex<Vec<Call>>,
    recommended: Mutex<usize>,
}

impl FakeSpotify {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a playlist holding `tracks`, listed after the ones already added.
    pub fn with_playlist(mut self, id: &str, name: &str, tracks: Vec<RawTrack>) -> Self {
        self.playlists.push(SimplifiedPlaylist {
            id: id.to_string(),
            name: name.to_string(),
            images: vec![image(&format!("https://mosaic.scdn.co/{}", id))],
            tracks: Some(PlaylistTracksRef {
                total: tracks.len() as u64,
            }),
        });
        self.playlist_items.insert(
            id.to_string(),
            tracks
                .into_iter()
                .map(|track| PlaylistTrackItem { track: Some(track) })
                .collect(),
        );
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn recommendation_calls(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Recommendations { seeds, .. } => Some(seeds),
                _ => None,
            })
            .collect()
    }

    pub fn artist_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::Artist(_)))
            .count()
    }

    pub fn fetched_playlists(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::PlaylistTracks(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl SpotifyApi for FakeSpotify {
    async fn current_user_playlists(&self, limit: u32) -> Result<Paging<SimplifiedPlaylist>> {
        self.record(Call::Playlists(limit));
        Ok(Paging {
            items: self.playlists.iter().take(limit as usize).cloned().collect(),
            total: Some(self.playlists.len() as u64),
            next: None,
        })
    }

    async fn playlist_tracks(&self, playlist_id: &str) -> Result<Paging<PlaylistTrackItem>> {
        self.record(Call::PlaylistTracks(playlist_id.to_string()));
        let items = self
            .playlist_items
            .get(playlist_id)
            .cloned()
            .unwrap_or_default();
        Ok(Paging {
            total: Some(items.len() as u64),
            items,
            next: None,
        })
    }

    async fn artist(&self, artist_id: &str) -> Result<ArtistProfile> {
        self.record(Call::Artist(artist_id.to_string()));
        let images = if self.artists_without_images.contains(artist_id) {
            Vec::new()
        } else {
            vec![image(&artist_image_url(artist_id))]
        };
        Ok(ArtistProfile {
            id: artist_id.to_string(),
            name: format!("Artist {}", artist_id),
            images,
        })
    }

    async fn audio_features(&self, track_id: &str) -> Result<Option<AudioFeatureScores>> {
        self.record(Call::AudioFeatures(track_id.to_string()));
        if self.tracks_without_features.contains(track_id) {
            return Ok(None);
        }
        Ok(Some(features()))
    }

    async fn recommendations(&self, seed_tracks: &[String], limit: u32) -> Result<Vec<RawTrack>> {
        self.record(Call::Recommendations {
            seeds: seed_tracks.to_vec(),
            limit,
        });
        let mut counter = self.recommended.lock().unwrap();
        let tracks = (0..limit)
            .map(|_| {
                *counter += 1;
                raw_track(&format!("rec{}", *counter), 50)
            })
            .collect();
        Ok(tracks)
    }

    async fn current_user(&self) -> Result<CurrentUser> {
        self.record(Call::CurrentUser);
        Ok(CurrentUser {
            id: "listener".to_string(),
            display_name: Some("Listener".to_string()),
        })
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<CreatePlaylistResponse> {
        self.record(Call::CreatePlaylist {
            user_id: user_id.to_string(),
            request: request.clone(),
        });
        Ok(CreatePlaylistResponse {
            id: "new-playlist".to_string(),
            name: request.name.clone(),
        })
    }

    async fn add_tracks_to_playlist(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<AddTrackToPlaylistResponse> {
        self.record(Call::AddTracks {
            playlist_id: playlist_id.to_string(),
            uris: uris.to_vec(),
        });
        Ok(AddTrackToPlaylistResponse {
            snapshot_id: "snapshot".to_string(),
        })
    }
}

pub fn image(url: &str) -> Image {
    Image {
        url: url.to_string(),
    }
}

pub fn artist_image_url(artist_id: &str) -> String {
    format!("https://i.scdn.co/image/{}", artist_id)
}

pub fn features() -> AudioFeatureScores {
    AudioFeatureScores {
        danceability: 0.64,
        energy: 0.74,
        loudness: -4.08,
        speechiness: 0.0284,
        acousticness: 0.00971,
        instrumentalness: 0.00678,
        liveness: 0.167,
        valence: 0.785,
        tempo: 116.879,
        mode: 1,
    }
}

/// A raw track `spotify:track:<id>` by artist `art-<id>`.
pub fn raw_track(id: &str, popularity: u32) -> RawTrack {
    RawTrack {
        name: format!("Track {}", id),
        uri: format!("spotify:track:{}", id),
        popularity,
        artists: vec![ArtistRef {
            name: format!("Artist {}", id),
            uri: format!("spotify:artist:art-{}", id),
        }],
        album: AlbumRef {
            name: format!("Album {}", id),
            release_date: "2015-07-17".to_string(),
            images: vec![image(&format!("https://i.scdn.co/album/{}", id))],
        },
    }
}

/// `count` raw tracks `t0..t<count>` with popularity `count - i`.
pub fn raw_tracks(count: usize) -> Vec<RawTrack> {
    (0..count)
        .map(|i| raw_track(&format!("t{}", i), (count - i) as u32))
        .collect()
}

pub fn record(id: &str, popularity: u32) -> TrackRecord {
    TrackRecord {
        artist_name: format!("Artist {}", id),
        artist_id: format!("art-{}", id),
        artist_image: artist_image_url(&format!("art-{}", id)),
        track_name: format!("Track {}", id),
        popularity,
        release_date: "2015-07-17".to_string(),
        album_cover: format!("https://i.scdn.co/album/{}", id),
        album_name: format!("Album {}", id),
        track_id: id.to_string(),
        features: features(),
        playlist: None,
    }
}

pub fn context(name: &str) -> PlaylistContext {
    PlaylistContext {
        name: name.to_string(),
        image: "https://iili.io/HlHy9Yx.png".to_string(),
    }
}

/// Expected recommendation count for a playlist of `track_count` tracks.
pub fn expected_recommendations(track_count: usize) -> usize {
    (5 * (track_count.min(20) / 5)).min(15)
}
