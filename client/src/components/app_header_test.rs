use super::*;
use leptos::reactive::owner::Owner;

fn with_owner<T>(f: impl FnOnce() -> T) -> T {
    let owner = Owner::new();
    owner.with(f)
}

#[test]
fn toggle_drawer_opens_only_requested_side() {
    with_owner(|| {
        let drawer = RwSignal::new(DrawerState::default());
        let open_right = toggle_drawer::<()>(drawer, DrawerSide::Right, true);

        open_right(());

        let state = drawer.get_untracked();
        assert!(state.is_open(DrawerSide::Right));
        assert!(!state.is_open(DrawerSide::Left));
        assert!(!state.is_open(DrawerSide::Top));
        assert!(!state.is_open(DrawerSide::Bottom));
    });
}

#[test]
fn toggle_drawer_open_twice_then_close() {
    with_owner(|| {
        let drawer = RwSignal::new(DrawerState::default());
        let open = toggle_drawer::<()>(drawer, DrawerSide::Right, true);
        let close = toggle_drawer::<()>(drawer, DrawerSide::Right, false);

        open(());
        open(());
        assert!(drawer.get_untracked().is_open(DrawerSide::Right));

        close(());
        assert!(!drawer.get_untracked().is_open(DrawerSide::Right));
        close(());
        assert_eq!(drawer.get_untracked(), DrawerState::default());
    });
}

#[test]
fn toggle_drawer_handler_is_reusable_across_copies() {
    with_owner(|| {
        let drawer = RwSignal::new(DrawerState::default());
        let open_left = toggle_drawer::<u8>(drawer, DrawerSide::Left, true);
        let copy = open_left;

        copy(1);
        open_left(2);
        assert!(drawer.get_untracked().is_open(DrawerSide::Left));
    });
}
