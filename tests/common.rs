#![cfg(feature = "std")]

use std::io::Cursor;

use macadam::avec::{Extractor, FromEntries, decode_reader, decode_slice};
use macadam::sans::header::FileMeta;

/// Records every receiver invocation as (name, declared size, slice).
#[derive(Default)]
struct Collector {
    calls: Vec<(String, usize, Vec<u8>)>,
}

impl Collector {
    /// Reassemble the recorded calls into whole files.
    fn files(&self) -> Vec<(String, Vec<u8>)> {
        let mut files: Vec<(String, usize, Vec<u8>)> = Vec::new();

        for (name, size, data) in &self.calls {
            match files.last_mut() {
                Some((n, s, content)) if n == name && content.len() < *s => {
                    content.extend_from_slice(data);
                }
                _ => files.push((name.clone(), *size, data.clone())),
            }
        }

        files.into_iter().map(|(n, _, c)| (n, c)).collect()
    }
}

impl FromEntries for Collector {
    fn add_content(&mut self, meta: &FileMeta, r: &[u8]) {
        let name = String::from_utf8(meta.name().to_vec()).unwrap();
        self.calls.push((name, meta.size(), r.to_vec()));
    }
}

/// Build an archive holding the given files, in order.
fn archive(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());

    for (name, content) in files {
        let mut header = tar::Header::new_ustar();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append_data(&mut header, name, *content).unwrap();
    }

    builder.into_inner().unwrap()
}

fn decode_chunked(data: &[u8], len: usize) -> Collector {
    let mut extractor = Extractor::new();
    let mut collector = Collector::default();

    for chunk in data.chunks(len) {
        extractor.feed(chunk, &mut collector).unwrap();
    }

    collector
}

#[test]
fn decode_slice_single_file() {
    let data = archive(&[("version", b"hello")]);

    let mut collector = Collector::default();
    decode_slice(&data, &mut collector).unwrap();

    assert_eq!(
        collector.calls,
        vec![("version".to_string(), 5, b"hello".to_vec())]
    );
}

#[test]
fn decode_slice_many_files() {
    let contents: Vec<Vec<u8>> = [0, 1, 511, 512, 513, 2048]
        .iter()
        .map(|n| (0..*n).map(|i| (i % 251) as u8).collect())
        .collect();
    let files: Vec<(&str, &[u8])> = ["empty", "one", "under", "exact", "over", "pages"]
        .iter()
        .zip(&contents)
        .map(|(n, c)| (*n, c.as_slice()))
        .collect();

    let data = archive(&files);

    let mut collector = Collector::default();
    decode_slice(&data, &mut collector).unwrap();

    let decoded = collector.files();
    assert_eq!(decoded.len(), files.len());
    for ((name, content), (decoded_name, decoded_content)) in files.iter().zip(&decoded) {
        assert_eq!(name, decoded_name);
        assert_eq!(*content, decoded_content.as_slice());
    }

    // Slices arrive one per block, trimmed to the declared size.
    for (_, size, data) in &collector.calls {
        assert!(data.len() <= 512);
        assert!(data.len() <= *size);
    }
}

#[test]
fn chunked_feeds_match_whole() {
    let data = archive(&[("alpha", &[7; 700]), ("beta", b"beta"), ("gamma", &[9; 512])]);

    let mut whole = Collector::default();
    decode_slice(&data, &mut whole).unwrap();

    for len in [1, 7, 512, 4096] {
        let chunked = decode_chunked(&data, len);
        assert_eq!(chunked.calls, whole.calls, "chunk length {len}");
    }
}

#[test]
fn empty_file_releases_the_following_header() {
    let data = archive(&[("empty", b""), ("next", b"hi")]);

    let mut collector = Collector::default();
    decode_slice(&data, &mut collector).unwrap();

    assert_eq!(
        collector.calls,
        vec![
            ("empty".to_string(), 0, Vec::new()),
            ("next".to_string(), 2, b"hi".to_vec()),
        ]
    );
}

#[test]
fn decode_reader_matches_slice() {
    let data = archive(&[("alpha", &[3; 1025]), ("beta", b"beta")]);

    let mut from_slice = Collector::default();
    decode_slice(&data, &mut from_slice).unwrap();

    let mut from_reader = Collector::default();
    decode_reader(&mut Cursor::new(&data), &mut from_reader).unwrap();

    assert_eq!(from_reader.calls, from_slice.calls);
}
