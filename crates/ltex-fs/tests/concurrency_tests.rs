//! Concurrent appends through one shared cache
//!
//! The cache lock covers the read-check-append sequence, so threads racing
//! to add overlapping words must still leave each word in the file once.

use ltex_fs::{NormalizedPath, WordFileCache, parse_words};
use std::fs;
use std::sync::{Arc, Barrier};
use std::thread;
use tempfile::tempdir;

#[test]
fn test_concurrent_appends_same_file_no_duplicates() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("shared.txt");
    let path = Arc::new(NormalizedPath::new(&file_path));
    let cache = Arc::new(WordFileCache::new());

    let num_threads = 8;
    let barrier = Arc::new(Barrier::new(num_threads));

    let handles: Vec<_> = (0..num_threads)
        .map(|thread_id| {
            let path = Arc::clone(&path);
            let cache = Arc::clone(&cache);
            let barrier = Arc::clone(&barrier);

            thread::spawn(move || {
                barrier.wait();
                // Every thread adds the shared words plus one of its own
                let words = vec![
                    "shared-one".to_string(),
                    "shared-two".to_string(),
                    format!("own-{}", thread_id),
                ];
                cache.append(&path, &words).unwrap()
            })
        })
        .collect();

    let mut total_added = 0;
    for handle in handles {
        total_added += handle.join().expect("Thread should not panic").len();
    }

    let content = fs::read_to_string(&file_path).unwrap();
    assert_eq!(content.lines().count(), num_threads + 2);
    assert_eq!(total_added, num_threads + 2);
    assert_eq!(content.matches("shared-one").count(), 1);
    assert_eq!(content.matches("shared-two").count(), 1);
    assert_eq!(parse_words(&content), cache.load(&path));
}

#[test]
fn test_concurrent_appends_different_files_all_succeed() {
    let dir = tempdir().unwrap();
    let cache = Arc::new(WordFileCache::new());
    let num_threads = 5;
    let barrier = Arc::new(Barrier::new(num_threads));

    let handles: Vec<_> = (0..num_threads)
        .map(|thread_id| {
            let dir_path = dir.path().to_path_buf();
            let cache = Arc::clone(&cache);
            let barrier = Arc::clone(&barrier);

            thread::spawn(move || {
                barrier.wait();
                let path = NormalizedPath::new(dir_path.join(format!("lang-{}.txt", thread_id)));
                cache.append(&path, &[format!("word-{}", thread_id)])
            })
        })
        .collect();

    for handle in handles {
        let added = handle
            .join()
            .expect("Thread should not panic")
            .expect("Append to a distinct file should succeed");
        assert_eq!(added.len(), 1);
    }
    assert_eq!(cache.len(), num_threads);
}
