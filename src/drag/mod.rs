//! Drag-transfer state machine.
//!
//! Models pointer drag gestures as an explicit `DragState` with a pure
//! `transition` function, independent of any UI toolkit's event objects.

pub mod machine;

pub use machine::{
    fits_champion_slot, transition, DragController, DragEffect, DragEvent, DragOrigin, DragState,
    DropTarget, CARD_GRID_ID, CHAMPION_SLOT_ID, DECK_LIST_ID,
};
