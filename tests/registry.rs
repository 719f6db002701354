#![cfg(feature = "egui")]

use std::sync::Arc;

use blocksheet::catalog::{self, UNREGISTERED_TYPE};
use blocksheet::icon::BlockIcon;
use blocksheet::registry::{BlockTypeDescriptor, BlockTypeRegistry, RegistryError};

fn descriptor(name: &str, title: &str) -> BlockTypeDescriptor {
    BlockTypeDescriptor {
        name: name.to_string(),
        title: title.to_string(),
        category: "text".to_string(),
        description: String::new(),
        icon: Some(BlockIcon::glyph("editor-paragraph")),
    }
}

#[test]
fn test_sentinel_never_offered_regardless_of_registration_order() {
    // Sentinel declared before the type is registered.
    let mut r = BlockTypeRegistry::new();
    r.set_unregistered_type_handler("core/missing");
    r.register(descriptor("core/paragraph", "Paragraph")).unwrap();
    r.register(descriptor("core/missing", "Unsupported")).unwrap();
    let offered: Vec<_> = r
        .available_block_types()
        .iter()
        .map(|d| d.name.clone())
        .collect();
    assert_eq!(offered, ["core/paragraph"]);

    // Sentinel declared after.
    let mut r = BlockTypeRegistry::new();
    r.register(descriptor("core/missing", "Unsupported")).unwrap();
    r.register(descriptor("core/paragraph", "Paragraph")).unwrap();
    r.set_unregistered_type_handler("core/missing");
    assert!(
        r.available_block_types()
            .iter()
            .all(|d| d.name != "core/missing")
    );
}

#[test]
fn test_offering_reflects_mutations_while_picker_is_open() {
    // The picker reads the offering every frame; simulate frames around a
    // late registration and check the memoized snapshot is invalidated.
    let mut r = BlockTypeRegistry::new();
    catalog::install_core_blocks(&mut r).unwrap();
    let frame1 = r.available_block_types();
    let frame2 = r.available_block_types();
    assert!(Arc::ptr_eq(&frame1, &frame2));

    r.register(descriptor("acme/chart", "Chart")).unwrap();
    let frame3 = r.available_block_types();
    assert_eq!(frame3.len(), frame1.len() + 1);
    assert_eq!(frame3.last().unwrap().name, "acme/chart");
}

#[test]
fn test_register_validates_names() {
    let mut r = BlockTypeRegistry::new();
    for bad in ["", "paragraph", "core/", "/paragraph", "Core/paragraph", "core/Para", "core/a b"] {
        assert_eq!(
            r.register(descriptor(bad, "Bad")),
            Err(RegistryError::InvalidName(bad.to_string())),
            "{bad:?} should be rejected"
        );
    }
    assert!(r.register(descriptor("acme/my-block2", "Ok")).is_ok());
}

#[test]
fn test_core_catalog_offering_has_unique_names() {
    let mut r = BlockTypeRegistry::new();
    catalog::install_core_blocks(&mut r).unwrap();
    let offered = r.available_block_types();
    let mut names: Vec<_> = offered.iter().map(|d| d.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), offered.len());
    assert!(r.unregistered_type_handler() == Some(UNREGISTERED_TYPE));
}
