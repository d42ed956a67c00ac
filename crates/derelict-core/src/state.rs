use crate::inventory::Inventory;
use crate::item::Item;
use crate::room::{Room, RoomId};

/// How many commands a torn suit can survive before the oxygen runs out.
pub const OXYGEN_BUDGET: u32 = 15;

/// Whether the run is still live, and how it ended if not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// The game is in progress.
    #[default]
    Active,
    /// The player died: suffocation or the helmet trap.
    Lost,
    /// The station's systems were restored.
    Won,
}

/// The whole mutable state of one run: rooms, inventory, flags, counters.
///
/// There is exactly one instance per run and it is exclusively owned by the
/// session driving it; handlers receive it by mutable reference.
#[derive(Debug, Clone)]
pub struct GameState {
    rooms: [Room; 5],
    location: RoomId,
    /// Items the player carries.
    pub inventory: Inventory,
    /// Airlock inner door pried open with the crowbar.
    pub airlock_open: bool,
    /// Observation-deck security door passed at least once; it stays open.
    pub obsdeck_unlocked: bool,
    /// Control-room door lock melted through with the torch.
    pub control_room_open: bool,
    /// Main computer repaired.
    pub computer_fixed: bool,
    /// Navigation system repaired.
    pub navigation_fixed: bool,
    /// Life-support system repaired.
    pub life_support_fixed: bool,
    /// Suit torn on the jagged panel; oxygen leaks while unrepaired.
    pub suit_damaged: bool,
    /// Suit sealed with duct tape; the leak never rearms.
    pub suit_repaired: bool,
    /// Commands left before a leaking suit runs dry.
    pub oxygen_remaining: u32,
    /// Headlight switched on.
    pub headlight_on: bool,
    /// Glow stick cracked and shining.
    pub glow_stick_lit: bool,
    /// Headlight batteries are dead, from the mess-hall trap or depletion.
    pub headlight_dead: bool,
    /// The player has entered the maintenance corridor; the battery clock
    /// runs from here on.
    pub in_maintenance: bool,
    /// Lit searches and room moves since the battery clock started.
    pub maintenance_actions: u32,
    /// Dark searches in the mess hall since the batteries died there.
    pub mess_hall_searches: u32,
    /// The mess-hall battery trap has already fired.
    pub mess_hall_trapped: bool,
    /// Feel-around already spent for the current room visit.
    pub feel_around_used: bool,
    /// Terminal status of the run.
    pub phase: Phase,
}

impl GameState {
    /// Set up a fresh run: all five rooms stocked, the player in the airlock
    /// carrying only the headlight.
    pub fn new() -> Self {
        Self {
            rooms: starting_rooms(),
            location: RoomId::Airlock,
            inventory: Inventory::carrying(Item::new(
                "Headlight",
                "A battery-powered light source that mounts on your head.",
            )),
            airlock_open: false,
            obsdeck_unlocked: false,
            control_room_open: false,
            computer_fixed: false,
            navigation_fixed: false,
            life_support_fixed: false,
            suit_damaged: false,
            suit_repaired: false,
            oxygen_remaining: OXYGEN_BUDGET,
            headlight_on: false,
            glow_stick_lit: false,
            headlight_dead: false,
            in_maintenance: false,
            maintenance_actions: 0,
            mess_hall_searches: 0,
            mess_hall_trapped: false,
            feel_around_used: false,
            phase: Phase::Active,
        }
    }

    /// Where the player currently stands.
    pub fn location(&self) -> RoomId {
        self.location
    }

    /// The room the player currently stands in.
    pub fn current_room(&self) -> &Room {
        self.room(self.location)
    }

    /// Mutable access to the room the player currently stands in.
    pub fn current_room_mut(&mut self) -> &mut Room {
        self.room_mut(self.location)
    }

    /// A specific room.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.ordinal()]
    }

    /// Mutable access to a specific room.
    pub fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.ordinal()]
    }

    /// Move the player into a room. Resets the per-visit feel-around budget
    /// and latches the maintenance battery clock on first corridor entry.
    pub fn enter(&mut self, room: RoomId) {
        self.location = room;
        self.feel_around_used = false;
        if room == RoomId::MaintenanceCorridor {
            self.in_maintenance = true;
        }
    }

    /// True while any light source is active.
    pub fn has_light(&self) -> bool {
        self.headlight_on || self.glow_stick_lit
    }

    /// True once the run has ended, in either direction.
    pub fn is_over(&self) -> bool {
        self.phase != Phase::Active
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

fn starting_rooms() -> [Room; 5] {
    [
        Room::new(
            RoomId::Airlock,
            vec![
                Item::new("Crowbar", "A sturdy metal bar, useful for prying things open."),
                Item::new(
                    "Duct Tape",
                    "Industrial strength adhesive tape. Can fix almost anything.",
                ),
                Item::mounted(
                    "Pressure Gauge",
                    "Shows the current air pressure levels in the station.",
                ),
            ],
        ),
        Room::new(
            RoomId::MaintenanceCorridor,
            vec![
                Item::new(
                    "Glow Stick",
                    "A chemical light source that provides dim illumination.",
                ),
                Item::new("Wire Cutters", "Heavy-duty cutters for electrical work."),
                Item::new(
                    "Repair Manual",
                    "Contains detailed instructions for station repairs.",
                ),
                Item::new(
                    "Sticky Note",
                    "A sticky note with the text: 'Observation Deck Security Code: 9572'",
                ),
            ],
        ),
        Room::new(
            RoomId::ObservationDeck,
            vec![
                Item::new("Blow Torch", "A powerful cutting tool. Requires fuel to operate."),
                Item::new("Star Chart", "A detailed map of nearby star systems."),
                Item::new(
                    "Telescope Lens",
                    "A precision ground lens from the observation telescope.",
                ),
                Item::new("Radio", "A shortwave radio. Might be useful for communication."),
                Item::new("Circuit Board", "An electronic component covered in microchips."),
            ],
        ),
        Room::new(
            RoomId::MessHall,
            vec![
                Item::new("Water Container", "A sealed container of purified water."),
                Item::new("First Aid Kit", "Contains basic medical supplies."),
                Item::new("Butane Canister", "A pressurized canister of butane fuel."),
                Item::new("9V Batteries", "A pack of fresh 9-volt batteries."),
                Item::new("Energy Bar", "A high-calorie emergency food ration."),
            ],
        ),
        Room::new(
            RoomId::ControlRoom,
            vec![
                Item::new("ASCII Table", "A reference chart showing ASCII character codes."),
                Item::new("Sticky Note", "A sticky note with the text: '4F 56 45 52 52 49 44 45'"),
            ],
        ),
    ]
}
