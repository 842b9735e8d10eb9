// SPDX-License-Identifier: MPL-2.0
mod common;

use common::FakeDogApi;
use dog_grid::domain::gallery::{Slot, SlotIndex};
use dog_grid::gallery::Gallery;

fn idx(i: usize) -> SlotIndex {
    SlotIndex::new(i).expect("index in range")
}

#[tokio::test]
async fn pinned_cells_survive_shuffle() {
    let api = FakeDogApi::new([
        "A", "B", "C", "D", "E", "F", "G", "H", "I", // initial load
        "n0", "n1", "n2", "n3", "n4", "n5", "n6", // shuffle
    ]);
    let mut gallery = Gallery::new();
    gallery.load_all(&api).await;
    gallery.toggle_cell(idx(2));
    gallery.toggle_cell(idx(5));

    gallery.shuffle(&api).await;

    let urls = gallery.export_snapshot();
    assert_eq!(urls[2], "C");
    assert_eq!(urls[5], "F");
    for (i, url) in urls.iter().enumerate() {
        if i != 2 && i != 5 {
            assert!(url.starts_with('n'), "slot {i} kept {url}");
        }
    }
    assert!(!gallery.is_busy());
}

#[tokio::test]
async fn shuffle_failures_become_empty_slots() {
    // Only three URLs left for seven unpinned slots
    let api = FakeDogApi::new(["A", "B", "C", "D", "E", "F", "G", "H", "I", "x", "y", "z"]);
    let mut gallery = Gallery::new();
    gallery.load_all(&api).await;
    gallery.toggle_cell(idx(0));
    gallery.toggle_cell(idx(8));

    gallery.shuffle(&api).await;

    let slots = gallery.slots();
    assert_eq!(slots[0], Slot::resolved("A"));
    assert_eq!(slots[8], Slot::resolved("I"));
    let empty = slots.iter().filter(|slot| slot.url.is_empty()).count();
    assert_eq!(empty, 4);
    assert!(slots.iter().all(|slot| !slot.loading));
}

#[tokio::test]
async fn failed_initial_load_leaves_nine_empty_slots() {
    let api = FakeDogApi::default();
    let mut gallery = Gallery::new();

    gallery.load_all(&api).await;

    assert!(gallery
        .slots()
        .iter()
        .all(|slot| slot.url.is_empty() && !slot.loading));
    assert!(!gallery.is_loading());
}

#[tokio::test]
async fn second_shuffle_is_rejected_while_busy() {
    let api = FakeDogApi::new(["A", "B", "C", "D", "E", "F", "G", "H", "I"]);
    let mut gallery = Gallery::new();
    gallery.load_all(&api).await;

    let plan = gallery.begin_shuffle().expect("first shuffle starts");
    assert!(gallery.is_busy());
    assert!(gallery.begin_shuffle().is_none());

    // Pins added while the fetch is in flight do not protect the slot
    gallery.toggle_cell(idx(0));
    let slots = plan.fetch(&api).await;
    gallery.finish_shuffle(slots);

    assert!(!gallery.is_busy());
    assert_eq!(gallery.slots()[0].url, "");
    assert!(gallery.is_pinned(idx(0)));
}

#[tokio::test]
async fn all_pinned_shuffle_changes_nothing() {
    let api = FakeDogApi::new(["A", "B", "C", "D", "E", "F", "G", "H", "I", "spare"]);
    let mut gallery = Gallery::new();
    gallery.load_all(&api).await;
    for index in SlotIndex::all() {
        gallery.toggle_cell(index);
    }
    let before = gallery.slots().clone();

    gallery.shuffle(&api).await;

    assert_eq!(gallery.slots(), &before);
    assert_eq!(gallery.pinned_count(), 9);
}
