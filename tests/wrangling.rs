mod common;

use common::StubLoader;
use rstest::rstest;
use xcb_wrangler::xcb::{CoreFns, RandrFns, ShmFns};
use xcb_wrangler::{InitStatus, LibraryId, LibraryStatus, Registry, SymbolTable};

#[rstest]
fn everything_present_loads_full() {
    let loader = StubLoader::with_everything();
    let registry = Registry::wrangle(&loader);

    assert_eq!(registry.overall(), InitStatus::Success);
    for &lib in LibraryId::ALL {
        assert_eq!(registry.status(lib), LibraryStatus::LoadedFull);
    }
    assert!(registry.core().is_some());
    let shm = registry.shm().unwrap();
    assert!(shm.xcb_shm_attach_fd.is_some());
    assert!(shm.xcb_shm_create_segment.is_some());
}

#[rstest]
fn absent_core_fails_overall_but_not_extensions() {
    let mut loader = StubLoader::with_everything();
    for soname in CoreFns::SONAMES {
        loader.uninstall(soname);
    }
    let registry = Registry::wrangle(&loader);

    assert_eq!(registry.overall(), InitStatus::CoreLibraryNotFound);
    assert_eq!(registry.status(LibraryId::Xcb), LibraryStatus::LoadFailed);
    assert!(registry.core().is_none());

    // Extension outcomes are independent of the core outcome.
    assert_eq!(registry.status(LibraryId::Shm), LibraryStatus::LoadedFull);
    assert_eq!(registry.status(LibraryId::Xfixes), LibraryStatus::LoadedFull);
    assert_eq!(registry.status(LibraryId::Present), LibraryStatus::LoadedFull);
    assert_eq!(registry.status(LibraryId::Randr), LibraryStatus::LoadedFull);
}

#[rstest]
fn missing_required_core_symbol_is_distinct_from_not_found() {
    let mut loader = StubLoader::with_everything();
    loader.hide_symbol("xcb_connect");
    let registry = Registry::wrangle(&loader);

    assert_eq!(registry.overall(), InitStatus::CoreSymbolMissing);
    assert_eq!(registry.status(LibraryId::Xcb), LibraryStatus::SymbolFailed);
    assert!(registry.core().is_none());
}

#[rstest]
fn absent_extension_degrades_alone() {
    let mut loader = StubLoader::with_everything();
    for soname in ShmFns::SONAMES {
        loader.uninstall(soname);
    }
    let registry = Registry::wrangle(&loader);

    assert_eq!(registry.overall(), InitStatus::Success);
    assert_eq!(registry.status(LibraryId::Shm), LibraryStatus::LoadFailed);
    assert!(registry.shm().is_none());

    assert!(registry.core().is_some());
    assert_eq!(registry.status(LibraryId::Xfixes), LibraryStatus::LoadedFull);
    assert_eq!(registry.status(LibraryId::Present), LibraryStatus::LoadedFull);
    assert_eq!(registry.status(LibraryId::Randr), LibraryStatus::LoadedFull);
}

#[rstest]
fn missing_required_extension_symbol_is_contained() {
    let mut loader = StubLoader::with_everything();
    loader.hide_symbol("xcb_xfixes_hide_cursor");
    let registry = Registry::wrangle(&loader);

    assert_eq!(registry.overall(), InitStatus::Success);
    assert_eq!(registry.status(LibraryId::Xfixes), LibraryStatus::SymbolFailed);
    assert!(registry.xfixes().is_none());
    assert_eq!(registry.status(LibraryId::Shm), LibraryStatus::LoadedFull);
    assert_eq!(registry.status(LibraryId::Randr), LibraryStatus::LoadedFull);
}

#[rstest]
fn missing_optional_symbol_degrades_to_partial() {
    let mut loader = StubLoader::with_everything();
    loader.hide_symbol("xcb_shm_attach_fd");
    let registry = Registry::wrangle(&loader);

    assert_eq!(registry.overall(), InitStatus::Success);
    assert_eq!(registry.status(LibraryId::Shm), LibraryStatus::LoadedPartial);
    assert!(registry.status(LibraryId::Shm).is_usable());

    // The table is usable; only the hidden entry point is absent.
    let shm = registry.shm().unwrap();
    assert!(shm.xcb_shm_attach_fd.is_none());
    assert!(shm.xcb_shm_create_segment.is_some());
}

#[rstest]
fn core_alone_is_enough() {
    let mut loader = StubLoader::empty();
    loader.install(CoreFns::SONAMES[0]);
    let registry = Registry::wrangle(&loader);

    assert_eq!(registry.overall(), InitStatus::Success);
    assert!(registry.core().is_some());
    for &lib in &LibraryId::ALL[1..] {
        assert_eq!(registry.status(lib), LibraryStatus::LoadFailed);
    }
}

#[rstest]
fn second_soname_is_tried_in_order() {
    let mut loader = StubLoader::with_everything();
    // Leave only the fallback name of the core library installed.
    loader.uninstall(CoreFns::SONAMES[0]);
    loader.install(CoreFns::SONAMES[CoreFns::SONAMES.len() - 1]);
    let registry = Registry::wrangle(&loader);

    assert_eq!(registry.overall(), InitStatus::Success);
    assert_eq!(registry.status(LibraryId::Xcb), LibraryStatus::LoadedFull);
}

#[rstest]
fn symbol_tables_are_ordered_and_classified() {
    // The core table is all-required: its status can never be partial.
    assert!(!CoreFns::SYMBOLS.is_empty());
    assert!(CoreFns::SYMBOLS.iter().all(|entry| entry.required));

    // Required entries precede optional ones, both in declaration order.
    let first_optional = ShmFns::SYMBOLS
        .iter()
        .position(|entry| !entry.required)
        .unwrap();
    assert!(
        ShmFns::SYMBOLS[first_optional..]
            .iter()
            .all(|entry| !entry.required)
    );
    assert_eq!(
        ShmFns::SYMBOLS[0].name.to_str().unwrap(),
        "xcb_shm_query_version"
    );

    // Entry point names carry their library's prefix.
    for entry in RandrFns::SYMBOLS {
        assert!(entry.name.to_str().unwrap().starts_with("xcb_randr_"));
    }
}
