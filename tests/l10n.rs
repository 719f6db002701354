use blocksheet::l10n::block_accessibility_label;

// Locale selection is process-global; keep every locale-sensitive
// assertion in one test so this file stays order-independent.
#[test]
fn test_accessibility_label_across_locales() {
    rust_i18n::set_locale("en");
    assert_eq!(block_accessibility_label("Image"), "Image block");

    // Spanish puts the noun first; the named placeholder makes that work.
    rust_i18n::set_locale("es");
    assert_eq!(block_accessibility_label("Image"), "Bloque Image");

    rust_i18n::set_locale("de");
    assert_eq!(block_accessibility_label("Image"), "Image-Block");

    // Unknown locales fall back to English.
    rust_i18n::set_locale("fr");
    assert_eq!(block_accessibility_label("Image"), "Image block");

    rust_i18n::set_locale("en");
}
