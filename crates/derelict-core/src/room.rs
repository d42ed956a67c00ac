use std::fmt;

use crate::item::Item;

/// The five station rooms in hull order, airlock first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomId {
    /// Ordinal 0. Where the player wakes up.
    Airlock,
    /// Ordinal 1. Dark until lit; arms the headlight battery clock.
    MaintenanceCorridor,
    /// Ordinal 2. Behind the first security door.
    ObservationDeck,
    /// Ordinal 3. Behind the second security door; scene of the battery trap.
    MessHall,
    /// Ordinal 4. Holds the main computer and the win condition.
    ControlRoom,
}

impl RoomId {
    /// All rooms in hull order.
    pub const ALL: [RoomId; 5] = [
        RoomId::Airlock,
        RoomId::MaintenanceCorridor,
        RoomId::ObservationDeck,
        RoomId::MessHall,
        RoomId::ControlRoom,
    ];

    /// Ordinal position along the hull, 0 at the airlock.
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// The room at the given ordinal, if it exists.
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Airlock => "Airlock",
            Self::MaintenanceCorridor => "Maintenance Corridor",
            Self::ObservationDeck => "Observation Deck",
            Self::MessHall => "Mess Hall",
            Self::ControlRoom => "Control Room",
        }
    }

    /// Static description shown on revisits.
    pub fn description(self) -> &'static str {
        match self {
            Self::Airlock => {
                "A pressurized chamber with heavy metal doors. A tool box sits in the corner."
            }
            Self::MaintenanceCorridor => "A long, dark narrow hallway.",
            Self::ObservationDeck => "Large windows show the vast expanse of space.",
            Self::MessHall => "Tables and storage cabinets line the walls. Food trays are scattered about.",
            Self::ControlRoom => "Banks of computers line the walls. Most screens are dark.",
        }
    }

    /// Rooms with no ambient lighting. Searching here without a light source
    /// means groping in the dark rather than an outright refusal.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Airlock | Self::MaintenanceCorridor)
    }

    /// The next room toward the control room.
    pub fn forward(self) -> Option<Self> {
        Self::from_ordinal(self.ordinal() + 1)
    }

    /// The previous room toward the airlock.
    pub fn back(self) -> Option<Self> {
        self.ordinal().checked_sub(1).and_then(Self::from_ordinal)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One room's mutable contents and visit-tracking flags.
#[derive(Debug, Clone)]
pub struct Room {
    id: RoomId,
    items: Vec<Item>,
    /// First-visit narration has already played.
    pub visited: bool,
    /// The room has been searched under light; its terminals are visible.
    pub searched: bool,
}

impl Room {
    /// Create a room containing the given items.
    pub fn new(id: RoomId, items: Vec<Item>) -> Self {
        Self {
            id,
            items,
            visited: false,
            searched: false,
        }
    }

    /// Which room this is.
    pub fn id(&self) -> RoomId {
        self.id
    }

    /// The items currently lying in the room, in placement order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// True when nothing is left in the room.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Put an item down at the end of the room's list.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Look up an item in the room by case-insensitive name.
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.matches(name))
    }

    /// Remove and return the first item matching the given name.
    ///
    /// Mounted items are never removed; callers check [`Item::is_mounted`]
    /// first to produce the right refusal.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        let index = self
            .items
            .iter()
            .position(|item| item.matches(name) && !item.is_mounted())?;
        Some(self.items.remove(index))
    }

    /// Remove and return the item at a zero-based position, refusing mounted
    /// items.
    pub fn remove_item_at(&mut self, index: usize) -> Option<Item> {
        if self.items.get(index).is_some_and(|item| !item.is_mounted()) {
            Some(self.items.remove(index))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rooms_chain_linearly() {
        assert_eq!(RoomId::Airlock.forward(), Some(RoomId::MaintenanceCorridor));
        assert_eq!(RoomId::ControlRoom.forward(), None);
        assert_eq!(RoomId::Airlock.back(), None);
        assert_eq!(RoomId::MessHall.back(), Some(RoomId::ObservationDeck));
        for (ordinal, room) in RoomId::ALL.iter().enumerate() {
            assert_eq!(room.ordinal(), ordinal);
            assert_eq!(RoomId::from_ordinal(ordinal), Some(*room));
        }
        assert_eq!(RoomId::from_ordinal(5), None);
    }

    #[test]
    fn only_the_first_two_rooms_are_dark() {
        assert!(RoomId::Airlock.is_dark());
        assert!(RoomId::MaintenanceCorridor.is_dark());
        assert!(!RoomId::ObservationDeck.is_dark());
        assert!(!RoomId::MessHall.is_dark());
        assert!(!RoomId::ControlRoom.is_dark());
    }

    #[test]
    fn mounted_items_stay_put() {
        let mut room = Room::new(
            RoomId::Airlock,
            vec![
                Item::mounted("Pressure Gauge", "Shows air pressure."),
                Item::new("Crowbar", "A sturdy metal bar."),
            ],
        );
        assert!(room.remove_item("pressure gauge").is_none());
        assert!(room.remove_item_at(0).is_none());
        assert!(room.remove_item("crowbar").is_some());
        assert_eq!(room.items().len(), 1);
    }
}
