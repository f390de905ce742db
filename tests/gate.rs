mod common;

use common::StubLoader;
use rstest::rstest;
use std::thread;
use xcb_wrangler::{InitStatus, LibraryId, LibraryStatus, Wrangler};

#[rstest]
fn init_is_memoized() {
    let loader = StubLoader::with_everything();
    let wrangler = Wrangler::new();

    assert!(wrangler.registry().is_none());
    assert_eq!(wrangler.status(LibraryId::Xcb), LibraryStatus::NotAttempted);

    assert_eq!(wrangler.ensure_init_with(&loader), InitStatus::Success);
    let opens = loader.opens();
    assert_eq!(opens, LibraryId::ALL.len());

    // The second call reads the memoized registry; no library is reopened.
    assert_eq!(wrangler.ensure_init_with(&loader), InitStatus::Success);
    assert_eq!(loader.opens(), opens);
}

#[rstest]
fn failure_is_memoized_too() {
    let empty = StubLoader::empty();
    let wrangler = Wrangler::new();
    assert_eq!(
        wrangler.ensure_init_with(&empty),
        InitStatus::CoreLibraryNotFound
    );
    for &lib in LibraryId::ALL {
        assert_eq!(wrangler.status(lib), LibraryStatus::LoadFailed);
    }

    // No retry within the process: a later call against a fully populated
    // fake system still returns the first result and never runs the engine.
    let full = StubLoader::with_everything();
    assert_eq!(
        wrangler.ensure_init_with(&full),
        InitStatus::CoreLibraryNotFound
    );
    assert_eq!(full.opens(), 0);
}

#[rstest]
fn concurrent_first_calls_agree() {
    let loader = StubLoader::with_everything();
    let wrangler = Wrangler::new();

    let results: Vec<InitStatus> = thread::scope(|scope| {
        (0..8)
            .map(|_| scope.spawn(|| wrangler.ensure_init_with(&loader)))
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert!(results.iter().all(|result| *result == InitStatus::Success));
    // Exactly one thread ran the engine.
    assert_eq!(loader.opens(), LibraryId::ALL.len());
    // No caller can have observed a partially built registry.
    let registry = wrangler.registry().unwrap();
    for &lib in LibraryId::ALL {
        assert_eq!(registry.status(lib), LibraryStatus::LoadedFull);
    }
}
