use super::*;

#[test]
fn size_counts_rows_and_separators() {
    let items = vec![
        MenuItem::new("buy", "Buy"),
        MenuItem::new("sell", "Sell"),
        MenuItem::separator(),
        MenuItem::new("alert", "Set alert"),
    ];
    let size = estimated_menu_size(&items);
    assert_eq!(size.width, MENU_WIDTH_PX);
    assert_eq!(size.height, 3.0 * 32.0 + 9.0 + 8.0);
}

#[test]
fn empty_menu_is_just_padding() {
    assert_eq!(estimated_menu_size(&[]).height, 8.0);
}
