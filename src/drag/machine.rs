//! Drag-and-drop transfer between the catalog grid and the deck list.
//!
//! The UI reports two events per gesture: `Start` when a card is picked up and
//! `End` when it is released. `transition` is a pure function from
//! `(state, event)` to `(next state, effect)`; `DragEffect::apply` realizes an
//! effect through the deck mutators. Nothing is committed before `End`, so a
//! cancelled gesture leaves the deck untouched.
//!
//! ## Effects on release
//!
//! | origin           | target        | effect                                  |
//! |------------------|---------------|-----------------------------------------|
//! | grid             | deck list     | add (routed)                            |
//! | grid             | champion slot | add if it is the legend's champion unit |
//! | deck list (zone) | nothing       | remove one from zone                    |
//! | deck list (zone) | grid          | remove one from zone                    |
//! | anything else    |               | none                                    |

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{classify, Card, CardId};
use crate::deck::DeckComposition;
use crate::zones::Zone;

/// Droppable id of the deck list.
pub const DECK_LIST_ID: &str = "deck-list";
/// Droppable id of the champion slot.
pub const CHAMPION_SLOT_ID: &str = "champion-slot";
/// Droppable id of the catalog grid.
pub const CARD_GRID_ID: &str = "card-grid";

/// Where a dragged card was picked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragOrigin {
    /// The catalog browser.
    Grid,
    /// A zone section of the deck list.
    DeckList(Zone),
}

impl DragOrigin {
    /// Parse the `source` / `deckType` pair attached to a draggable.
    ///
    /// A deck-list source without a known zone tag is unrecognized.
    #[must_use]
    pub fn from_tags(source: &str, deck_type: Option<&str>) -> Option<Self> {
        match source {
            "grid" => Some(DragOrigin::Grid),
            "deck-list" => deck_type.and_then(Zone::from_tag).map(DragOrigin::DeckList),
            _ => None,
        }
    }
}

/// Where a card was released.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropTarget {
    DeckList,
    ChampionSlot,
    Grid,
    /// A droppable this machine does not handle.
    Other,
}

impl DropTarget {
    /// Map a droppable id to a target.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        match id {
            DECK_LIST_ID => DropTarget::DeckList,
            CHAMPION_SLOT_ID => DropTarget::ChampionSlot,
            CARD_GRID_ID => DropTarget::Grid,
            _ => DropTarget::Other,
        }
    }
}

/// Drag state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { card: Card, origin: DragOrigin },
}

impl DragState {
    /// The card being dragged, for the drag preview.
    #[must_use]
    pub fn active_card(&self) -> Option<&Card> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { card, .. } => Some(card),
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

/// Pointer events.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragEvent {
    Start { card: Card, origin: DragOrigin },
    /// `target` is `None` when released outside every droppable.
    End { target: Option<DropTarget> },
}

/// Deck change requested by a completed gesture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragEffect {
    /// Route the card and add it.
    Add(Card),
    /// Remove one instance of a card from a zone.
    Remove { zone: Zone, card: CardId },
}

impl DragEffect {
    /// Apply this effect to `deck`.
    pub fn apply(&self, deck: &mut DeckComposition) {
        match self {
            DragEffect::Add(card) => {
                deck.add_card(card);
            }
            DragEffect::Remove { zone, card } => deck.remove_one(*zone, card),
        }
    }
}

/// Check whether `card` may be dropped into the champion slot.
///
/// Requires a legend, a "Champion Unit" type and at least one tag shared with
/// the legend.
#[must_use]
pub fn fits_champion_slot(card: &Card, legend: Option<&Card>) -> bool {
    legend.is_some_and(|l| classify::is_champion_unit(card) && card.shares_tag_with(l))
}

/// Compute the next state and the effect of `event`.
///
/// `legend` is the deck's current legend, consulted for champion-slot drops.
/// A `Start` while already dragging replaces the gesture; an `End` while
/// idle does nothing.
#[must_use]
pub fn transition(
    state: DragState,
    event: DragEvent,
    legend: Option<&Card>,
) -> (DragState, Option<DragEffect>) {
    match event {
        DragEvent::Start { card, origin } => {
            debug!(card = %card.id, ?origin, "drag start");
            (DragState::Dragging { card, origin }, None)
        }
        DragEvent::End { target } => {
            let DragState::Dragging { card, origin } = state else {
                return (DragState::Idle, None);
            };

            let effect = match (origin, target) {
                (DragOrigin::Grid, Some(DropTarget::DeckList)) => Some(DragEffect::Add(card)),
                (DragOrigin::Grid, Some(DropTarget::ChampionSlot)) => {
                    fits_champion_slot(&card, legend).then_some(DragEffect::Add(card))
                }
                (DragOrigin::DeckList(zone), None | Some(DropTarget::Grid)) => {
                    Some(DragEffect::Remove {
                        zone,
                        card: card.id,
                    })
                }
                _ => None,
            };

            debug!(?origin, ?target, ?effect, "drag end");
            (DragState::Idle, effect)
        }
    }
}

/// Drag state bound to the deck it edits.
///
/// Feeds events through `transition` and applies the resulting effect, so
/// each release is one atomic deck change.
#[derive(Clone, Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Pick up a card.
    pub fn drag_start(&mut self, card: Card, origin: DragOrigin) {
        self.handle(DragEvent::Start { card, origin }, None);
    }

    /// Release the current card onto `target` and apply the outcome to `deck`.
    ///
    /// Returns the effect that was applied, if any.
    pub fn drag_end(
        &mut self,
        target: Option<DropTarget>,
        deck: &mut DeckComposition,
    ) -> Option<DragEffect> {
        let effect = self.handle(DragEvent::End { target }, deck.legend());
        if let Some(effect) = &effect {
            effect.apply(deck);
        }
        effect
    }

    fn handle(&mut self, event: DragEvent, legend: Option<&Card>) -> Option<DragEffect> {
        let (next, effect) = transition(std::mem::take(&mut self.state), event, legend);
        self.state = next;
        effect
    }
}
