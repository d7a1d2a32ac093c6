use super::*;

// =============================================================
// offer
// =============================================================

#[test]
fn accepted_images_are_appended_in_order() {
    let mut sel = PhotoSelection::default();
    sel.offer("a.png", "image/png", || 1).unwrap();
    sel.offer("b.jpg", "image/jpeg", || 2).unwrap();
    sel.offer("c.gif", "image/gif", || 3).unwrap();
    let names: Vec<&str> = sel.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["a.png", "b.jpg", "c.gif"]);
    assert_eq!(sel.len(), 3);
}

#[test]
fn rejected_type_is_not_added_and_handle_not_built() {
    let mut sel: PhotoSelection<u32> = PhotoSelection::default();
    let mut built = false;
    let result = sel.offer("doc.pdf", "application/pdf", || {
        built = true;
        0
    });
    assert_eq!(
        result,
        Err(PhotoRejected { name: "doc.pdf".to_owned(), mime: "application/pdf".to_owned() })
    );
    assert!(!built);
    assert!(sel.is_empty());
}

#[test]
fn every_valid_file_of_a_batch_is_kept() {
    let mut sel = PhotoSelection::default();
    let picked = [("1.png", "image/png"), ("2.webp", "image/webp"), ("3.png", "image/png"), ("4.png", "image/png")];
    let rejected = picked
        .iter()
        .filter(|(name, mime)| sel.offer(name, mime, || ()).is_err())
        .count();
    assert_eq!(rejected, 1);
    assert_eq!(sel.len(), 3);
}

// =============================================================
// remove / take_all
// =============================================================

#[test]
fn remove_returns_entry_and_keeps_others() {
    let mut sel = PhotoSelection::default();
    let a = sel.offer("same.png", "image/png", || "a").unwrap();
    let b = sel.offer("same.png", "image/png", || "b").unwrap();
    let removed = sel.remove(a).unwrap();
    assert_eq!(removed.file, "a");
    assert_eq!(sel.len(), 1);
    assert_eq!(sel.entries()[0].id, b);
}

#[test]
fn remove_unknown_id_is_none() {
    let mut sel: PhotoSelection<()> = PhotoSelection::default();
    assert!(sel.remove(42).is_none());
}

#[test]
fn ids_are_not_reused_after_removal() {
    let mut sel = PhotoSelection::default();
    let a = sel.offer("a.png", "image/png", || ()).unwrap();
    sel.remove(a);
    let b = sel.offer("b.png", "image/png", || ()).unwrap();
    assert_ne!(a, b);
}

#[test]
fn take_all_empties_selection() {
    let mut sel = PhotoSelection::default();
    sel.offer("a.png", "image/png", || ()).unwrap();
    sel.offer("b.png", "image/png", || ()).unwrap();
    assert_eq!(sel.take_all().len(), 2);
    assert!(sel.is_empty());
}
