//! Interactive terminals: security door gates, the main computer, and the
//! navigation and life support consoles.

use derelict_core::{GameState, Phase, RoomId};

use crate::console::{Console, Pace};
use crate::narration;

/// The security code accepted by both door terminals.
pub const DOOR_CODE: &str = "9572";

/// The main computer password, also accepted as its hex spelling.
pub const COMPUTER_PASSWORD: &str = "password";

/// How a security-gate session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// The right code was entered; the door is open.
    Granted,
    /// A wrong code was entered; the door stays shut.
    Denied,
    /// The player backed out (entered 0, or input ended).
    Cancelled,
}

/// Which sealed door a security terminal guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityDoor {
    /// Between the maintenance corridor and the observation deck.
    ObservationDeck,
    /// Between the observation deck and the mess hall.
    MessHall,
}

impl SecurityDoor {
    fn banner(self) -> &'static str {
        match self {
            SecurityDoor::ObservationDeck => "=== OBSERVATION DECK SECURITY TERMINAL ===",
            SecurityDoor::MessHall => "=== MESS HALL SECURITY TERMINAL ===",
        }
    }

    fn opening_line(self) -> &'static str {
        match self {
            SecurityDoor::ObservationDeck => {
                "The heavy door to the observation deck slides open with a hydraulic hiss."
            }
            SecurityDoor::MessHall => {
                "The mess hall door unlocks and swings open on creaking hinges."
            }
        }
    }
}

/// Runs one pass of the keypad dialog for a sealed door.
pub fn security_gate<C: Console>(console: &mut C, door: SecurityDoor) -> GateOutcome {
    console.type_out(door.banner(), Pace::Quick);
    console.line("Accessing security systems...");
    console.line("Initiating authentication protocol...");
    let Some(entry) = console.prompt("Enter security code (or 0 to cancel): ") else {
        console.line("Terminal session terminated.");
        return GateOutcome::Cancelled;
    };
    let entry = entry.trim();
    if entry == "0" {
        console.line("Terminal session terminated.");
        return GateOutcome::Cancelled;
    }
    console.line("Validating code...");
    console.pause(1);
    if entry == DOOR_CODE {
        console.type_out("ACCESS GRANTED", Pace::Slow);
        console.line("Disengaging security locks...");
        console.line(door.opening_line());
        GateOutcome::Granted
    } else {
        console.type_out("ACCESS DENIED", Pace::Slow);
        console.line("Invalid security code. Terminal locked for 5 seconds.");
        console.countdown(5);
        GateOutcome::Denied
    }
}

fn is_password(entry: &str) -> bool {
    let lowered = entry.trim().to_lowercase();
    lowered == COMPUTER_PASSWORD
        || lowered == "70617373776f7264"
        || lowered == "70 61 73 73 77 6f 72 64"
}

/// Runs the main computer diagnostic terminal in the control room.
///
/// Sets the game to `Won` when the diagnostic completes with the circuit
/// board in hand, and returns the closing reply text.
pub fn main_computer<C: Console>(console: &mut C, state: &mut GameState) -> String {
    if state.computer_fixed {
        return "The computer system is functioning normally.".to_string();
    }
    console.line("! The main computer is malfunctioning. Its screen flickers erratically.");
    console.type_out("=== MAIN COMPUTER DIAGNOSTIC TERMINAL ===", Pace::Quick);
    console.type_out("70 61 73 73 77 6F 72 64 3A", Pace::Slow);
    let Some(entry) = console.prompt("") else {
        return "You step away from the terminal.".to_string();
    };
    if entry.trim() == "0" {
        return "You step away from the terminal.".to_string();
    }
    if !is_password(&entry) {
        console.type_out("41 63 63 65 73 73 20 44 65 6E 69 65 64", Pace::Slow);
        console.type_out(
            "45 72 72 6F 72 20 2D 20 49 6E 76 61 6C 69 64 20 48 65 78 20 43 6F 64 65",
            Pace::Slow,
        );
        return "The terminal locks you out.".to_string();
    }
    console.type_out("41 63 63 65 73 73 20 47 72 61 6E 74 65 64", Pace::Slow);
    if state.inventory.contains("Circuit Board") {
        console.line(">> Initiating diagnostic scan...");
        console.pause(1);
        console.line(">> Faulty component detected: primary logic board.");
        console.line(">> Compatible replacement found in user inventory.");
        console.line(">> Installing circuit board...");
        console.pause(1);
        console.line(">> Recalibrating life support mixture...");
        console.line(">> Re-triangulating station position...");
        console.line(">> All systems restored.");
        state.inventory.remove("Circuit Board");
        state.computer_fixed = true;
        state.navigation_fixed = true;
        state.life_support_fixed = true;
        state.phase = Phase::Won;
        narration::win_closing().to_string()
    } else {
        console.type_out(
            "52 75 6E 6E 69 6E 67 20 44 69 61 67 6E 6F 73 74 69 63",
            Pace::Slow,
        );
        console.type_out(
            "43 6F 6D 70 75 74 65 72 20 43 6F 6D 70 6F 6E 65 6E 74 20 4D 61 6C 66 75 6E 63 74 69 6F 6E 69 6E 67",
            Pace::Slow,
        );
        "* The computer needs a replacement component. Perhaps a circuit board.".to_string()
    }
}

/// Runs the navigation console on the observation deck.
pub fn navigation_terminal<C: Console>(console: &mut C, state: &mut GameState) -> String {
    console.type_out("=== NAVIGATION SYSTEM TERMINAL ===", Pace::Quick);
    console.line("Booting navigation subsystems...");
    if !state.computer_fixed {
        console.type_out(
            "ERROR: Cannot establish connection to main computer",
            Pace::Slow,
        );
        return "! Navigation control is locked out until the main computer is restored."
            .to_string();
    }
    if state.navigation_fixed {
        return "* Navigation System: Nominal\n\
                * Position verified. Stellar drift: 0.0 parsecs."
            .to_string();
    }
    if state.inventory.contains("Star Chart") && state.inventory.contains("Telescope Lens") {
        console.line("Cross-referencing star chart...");
        console.line("Calibrating telescope optics...");
        console.pause(1);
        state.navigation_fixed = true;
        "* Navigation system recalibrated. Position lock acquired.".to_string()
    } else {
        "* The navigation system needs repairs. You'll need a Star Chart and Telescope Lens."
            .to_string()
    }
}

/// Runs the life support console in the maintenance corridor.
pub fn life_support_terminal<C: Console>(console: &mut C, state: &mut GameState) -> String {
    console.type_out("=== LIFE SUPPORT SYSTEM TERMINAL ===", Pace::Quick);
    console.line("Querying atmospheric processors...");
    if !state.computer_fixed {
        console.type_out(
            "ERROR: Cannot establish connection to main computer",
            Pace::Slow,
        );
        return "! Life support control is locked out until the main computer is restored."
            .to_string();
    }
    if state.life_support_fixed {
        return "* Life Support System: Nominal\n\
                * Oxygen levels: Normal\n\
                * Pressure: Stable\n\
                * Temperature: 21C"
            .to_string();
    }
    if state.inventory.contains("Water Filter") && state.inventory.contains("Battery Pack") {
        console.line("Installing filtration cartridge...");
        console.line("Connecting auxiliary power...");
        console.pause(1);
        state.life_support_fixed = true;
        "* Life support recalibrated. O2 recycling restored.".to_string()
    } else {
        "* The life support system needs repairs. You'll need a Water Filter and Battery Pack."
            .to_string()
    }
}

/// Names of the terminal this room offers, if any, once the room is searched.
pub fn terminal_in(room: RoomId) -> Option<&'static str> {
    match room {
        RoomId::MaintenanceCorridor => Some("Life Support System Terminal"),
        RoomId::ObservationDeck => Some("Navigation System Terminal"),
        RoomId::ControlRoom => Some("Main Computer System Terminal"),
        _ => None,
    }
}

/// Lines listed under "You also notice:" after a lit search. The security
/// door panels are scenery here; their codes are entered while moving.
pub fn search_notices(room: RoomId) -> &'static [&'static str] {
    match room {
        RoomId::MaintenanceCorridor => &[
            "An Observation Deck Security Terminal",
            "A Life Support System Terminal",
        ],
        RoomId::ObservationDeck => &[
            "A Navigation System Terminal",
            "A Mess Hall Security Terminal",
        ],
        RoomId::ControlRoom => &["A Main Computer System Terminal"],
        _ => &[],
    }
}
