mod common;

use common::{context, record};
use sporlrec::export::{RECOMMENDATIONS_FILE, TRACKS_FILE, export, to_csv};

const HEADER_LINE: &str = "artist_name,artist_id,artist_image,track_name,popularity,release_date,album_cover,album_name,track_id,playlist_name,playlist_image,danceability,energy,loudness,speechiness,acousticness,instrumentalness,liveness,valence,tempo,mode";

fn parse(bytes: &[u8]) -> Vec<csv::StringRecord> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(bytes)
        .records()
        .collect::<Result<_, _>>()
        .unwrap()
}

#[test]
fn test_empty_list_writes_header_only() {
    let bytes = to_csv(&[]).unwrap();
    let text = String::from_utf8(bytes).unwrap();

    assert_eq!(text.trim_end(), HEADER_LINE);
}

#[test]
fn test_rows_follow_header_columns() {
    let mut labelled = record("abc", 79);
    labelled.playlist = Some(context("Lounge Jazz"));
    let unlabelled = record("def", 12);

    let rows = parse(&to_csv(&[labelled, unlabelled]).unwrap());

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].iter().collect::<Vec<_>>().join(","), HEADER_LINE);
    assert!(rows.iter().all(|row| row.len() == 21));

    let first = &rows[1];
    assert_eq!(&first[0], "Artist abc");
    assert_eq!(&first[1], "art-abc");
    assert_eq!(&first[4], "79");
    assert_eq!(&first[8], "abc");
    assert_eq!(&first[9], "Lounge Jazz");
    assert_eq!(&first[10], "https://iili.io/HlHy9Yx.png");
    assert_eq!(first[11].parse::<f64>().unwrap(), 0.64);
    assert_eq!(first[19].parse::<f64>().unwrap(), 116.879);
    assert_eq!(&first[20], "1");

    // no playlist context leaves both playlist cells empty
    let second = &rows[2];
    assert_eq!(&second[8], "def");
    assert_eq!(&second[9], "");
    assert_eq!(&second[10], "");
}

#[tokio::test]
async fn test_export_writes_both_files() {
    let dir = std::env::temp_dir().join(format!("sporlrec-export-{}", std::process::id()));

    let paths = export(&dir, &[record("abc", 79)], &[]).await.unwrap();

    assert_eq!(paths, vec![dir.join(TRACKS_FILE), dir.join(RECOMMENDATIONS_FILE)]);

    let tracks = std::fs::read(&paths[0]).unwrap();
    assert_eq!(parse(&tracks).len(), 2);

    let recommendations = std::fs::read_to_string(&paths[1]).unwrap();
    assert_eq!(recommendations.trim_end(), HEADER_LINE);

    std::fs::remove_dir_all(&dir).unwrap();
}
