//! Static narration: intro, first-visit text, status pages, and scripts.
//!
//! Lines prefixed `! ` are alerts and lines prefixed `* ` are status info;
//! the CLI colors them and prints everything else plain.

use derelict_core::{GameState, Inventory, RoomId};

/// The emergency-alert opening shown once at startup.
pub fn intro() -> String {
    "=== EMERGENCY ALERT ===\n\
     \n\
     Multiple critical systems are down aboard the space station:\n\
     \n\
     - Life Support System: Critical Failure\n\
     - Navigation System: Offline\n\
     - Computer Systems: Malfunctioning\n\
     \n\
     Mission Objectives:\n\
     1. Make your way through the space station to reach the Control Room\n\
     2. Collect necessary tools and equipment\n\
     3. Restore all critical systems (Navigation, Life Support, and Computer Systems)"
        .to_string()
}

/// One-time narration played the first time the player enters a room.
pub fn first_visit(room: RoomId) -> &'static str {
    match room {
        RoomId::Airlock => {
            "The airlock chamber hisses softly as pressure equalizes. Emergency backup \
             lights cast long shadows across the curved metal walls. The faint glow of \
             distant stars filters through the thick observation window, barely \
             illuminating the essential equipment stored here."
        }
        RoomId::MaintenanceCorridor => {
            "The maintenance corridor stretches before you, a claustrophobic tunnel of \
             exposed infrastructure. Through your helmet's visor, you can see damaged \
             electrical systems sparking in the darkness."
        }
        RoomId::ObservationDeck => {
            "The observation deck opens up into a vast panorama of stars. The reinforced \
             windows span from floor to ceiling, offering a breathtaking view of the \
             infinite void. Navigation equipment blinks silently, their displays casting \
             a soft blue glow across the abandoned workstations."
        }
        RoomId::MessHall => {
            "The mess hall stands frozen in time: half-eaten meals still sitting on \
             tables, chairs askew as if hastily abandoned. The gentle hum of food \
             preservation units provides an eerie backdrop to the scene of interrupted \
             daily life."
        }
        RoomId::ControlRoom => {
            "Banks of computers line the walls of the control room, their screens \
             flickering with intermittent power. Status displays flash urgent warnings \
             in red and amber, casting an unsettling glow across the primary command \
             console. This is the brain of the station, and it's clearly unwell."
        }
    }
}

/// The station map with the current room marked, plus mission objectives.
pub fn map(current: RoomId) -> String {
    let mut page = String::from("=== Station Layout & Mission Info ===\n\n");
    for room in RoomId::ALL.iter().rev() {
        let marker = if *room == current { "  -->  " } else { "       " };
        page.push_str(marker);
        page.push_str(room.name());
        page.push('\n');
        if *room != RoomId::Airlock {
            page.push_str("          |\n");
        }
    }
    page.push_str(
        "\n=== Mission Objectives ===\n\
         \x20   1. Make your way through the space station to reach the Control Room\n\
         \x20   2. Collect necessary repair tools and equipment\n\
         \x20   3. Restore all critical systems\n",
    );
    page
}

/// The command list.
pub fn help() -> String {
    format!(
        "Available Commands:\n\
         \x20   - search (s)\n\
         \x20   - view inventory (I)\n\
         \x20   - room info (i)\n\
         \x20   - take [item] (g)\n\
         \x20   - examine [item] (e)\n\
         \x20   - use [item] (u)\n\
         \x20   - drop [item] (d)\n\
         \x20   - move rooms (M, Move, open door)\n\
         \x20   - map (m)\n\
         \x20   - feel around (when it's dark)\n\
         \x20   - help (h)\n\
         \n\
         You can carry up to {} items.",
        Inventory::CAPACITY
    )
}

/// The per-room status page, reflecting live flags.
pub fn room_info(state: &GameState) -> String {
    let mut page = format!("=== {} Information ===\n\n", state.location().name());
    match state.location() {
        RoomId::Airlock => {
            page.push_str(
                "The airlock serves as the primary entry and exit point for the station. \
                 The reinforced doors are designed to withstand extreme pressure differences.\n\
                 ! CAUTION: Emergency lighting systems are non-functional.\n",
            );
            if state.airlock_open {
                page.push_str("* Inner door: pried open.\n");
            } else {
                page.push_str("! Inner door: sealed.\n");
            }
        }
        RoomId::MaintenanceCorridor => {
            page.push_str(
                "The maintenance corridor houses the station's vital infrastructure. \
                 Power conduits and life support systems run through its walls.\n\
                 * Engineering Note: Last scheduled maintenance was interrupted mid-task. \
                 Tools left behind suggest a hasty evacuation.\n\
                 ! CAUTION: Unstable power fluctuations detected in primary conduits.\n",
            );
        }
        RoomId::ObservationDeck => {
            page.push_str(
                "The observation deck's reinforced windows provide a 180-degree view of space.\n\
                 * Log Entry: Strange readings were reported by the night shift. Several \
                 instruments show impossible stellar configurations.\n\
                 ! Status: Backup navigation systems are operational but reporting \
                 conflicting coordinates.\n",
            );
        }
        RoomId::MessHall => {
            page.push_str(
                "The mess hall was designed for a crew of twelve. Food synthesizers and \
                 storage units line the walls.\n\
                 * Personal Log: 'The coffee machine started making strange noises this \
                 morning. Then all hell broke loose.'\n",
            );
            if state.control_room_open {
                page.push_str("* Control room door: cut open.\n");
            } else {
                page.push_str("! Control room door: sealed.\n");
            }
        }
        RoomId::ControlRoom => {
            page.push_str(
                "The control room is the brain of the station. All critical systems can \
                 be monitored and controlled from here.\n\
                 * Final Log: 'Multiple system failures detected. Navigation errors \
                 increasing. Emergency protocols initiated.'\n\
                 ! CRITICAL: Main computer core experiencing cascading failures.\n",
            );
        }
    }
    if state.suit_damaged && !state.suit_repaired {
        page.push_str("! Suit integrity compromised. Oxygen leak active.\n");
    } else if state.suit_repaired {
        page.push_str("* Suit patched with duct tape. Holding.\n");
    }
    if state.computer_fixed && state.navigation_fixed && state.life_support_fixed {
        page.push_str("* All station systems nominal.\n");
    }
    page
}

/// Live readout from the wall-mounted pressure gauge in the airlock.
pub fn pressure_gauge_readout() -> &'static str {
    "The digital display shows critical readings:\n\
     Main Hull: 68% nominal pressure\n\
     Deck 2: WARNING - Pressure dropping\n\
     Life Support: CRITICAL - System malfunction\n\
     The gauge's warning light pulses an angry red."
}

/// The bookmarked pages of the repair manual.
pub fn repair_manual_page() -> &'static str {
    "Item: Repair Manual\n\
     \n\
     A technical manual detailing station systems. Several pages are bookmarked:\n\
     \n\
     CRITICAL SYSTEMS STATUS:\n\
     \x20   1. Life Support System\n\
     \x20   - Chemical imbalance detected in O2 recycling\n\
     \x20   - O2/N2 mixture: 17.3% (WARNING: Below safe threshold)\n\
     \x20   - Requires main computer for mixture calibration\n\
     \n\
     \x20   2. Navigation System\n\
     \x20   - Position verification failure\n\
     \x20   - Stellar drift calculation error: -47.3 parsecs\n\
     \x20   - Main computer connection required for triangulation\n\
     \n\
     \x20   3. Computer Core\n\
     \x20   - Primary systems offline\n\
     \x20   - Required for all critical system calibration\n\
     \x20   - Must be repaired first to enable other systems\n\
     \n\
     ! WARNING: Attempting system repairs without main computer online may result \
     in cascading failures."
}

/// The hex reference chart on the ASCII table.
pub fn ascii_table_page() -> &'static str {
    "Item: ASCII Table\n\
     \n\
     === ASCII HEX REFERENCE ===\n\
     \n\
     Hex  Char   |  Hex  Char   |  Hex  Char\n\
     ----------------------------|----------\n\
     41   A      |  4D    M     |  59    Y\n\
     42   B      |  4E    N     |  5A    Z\n\
     43   C      |  4F    O     |  20   [space]\n\
     44   D      |  50    P     |  3A    :\n\
     45   E      |  51    Q     |  2D    -\n\
     46   F      |  52    R     |  2E    .\n\
     47   G      |  53    S     |  2C    ,\n\
     48   H      |  54    T     |  21    !\n\
     49   I      |  55    U     |  3F    ?\n\
     4A   J      |  56    V     |  28    (\n\
     4B   K      |  57    W     |  29    )\n\
     4C   L      |  58    X     |  27    '\n\
     \n\
     61   a      |  6D    m     |  79    y\n\
     62   b      |  6E    n     |  7A    z\n\
     63   c      |  6F    o     |\n\
     64   d      |  70    p     |\n\
     65   e      |  71    q     |\n\
     66   f      |  72    r     |\n\
     67   g      |  73    s     |\n\
     68   h      |  74    t     |\n\
     69   i      |  75    u     |\n\
     6A   j      |  76    v     |\n\
     6B   k      |  77    w     |\n\
     6C   l      |  78    x     |"
}

/// One-time alert when the suit tears on the jagged panel.
pub fn suit_tear() -> &'static str {
    "! As you reach for the observation deck door controls, your suit catches on a \
     jagged piece of torn metal!\n\
     ! WARNING: Suit integrity compromised. Oxygen leak detected. Estimated 5 minutes \
     of breathable air remaining.\n\
     ! You need to seal the tear quickly!"
}

/// One-time narration when the mess hall kills the headlight.
pub fn mess_hall_trap() -> &'static str {
    "! Your headlight suddenly flickers and dies. The batteries are completely drained!\n\
     The mess hall is plunged into darkness...\n\
     * Maybe you could try searching around in the dark..."
}

/// The third dark search in the mess hall turns up a fresh battery pack.
pub fn batteries_found() -> &'static str {
    "After fumbling in the darkness, your hand brushes against something familiar...\n\
     * You found: 9V Batteries! You replace the batteries in your headlight, and turn it on!"
}

/// Fatal: the oxygen countdown reached zero.
pub fn suffocation() -> &'static str {
    "Your suit's oxygen supply is depleted. The room begins to spin as you lose \
     consciousness...\n\
     \n\
     Game Over"
}

/// Fatal: the helmet came all the way off.
pub fn helmet_removed() -> &'static str {
    "! The thin, toxic atmosphere burns your lungs as you gasp for breath.\n\
     ! With life support offline, the station's air is unbreathable. Your vision \
     begins to blur as oxygen deprivation sets in...\n\
     \n\
     You collapse to the floor. The energy bar falls from your lifeless hand.\n\
     \n\
     ! GAME OVER"
}

/// Fatal: the reseal came too late.
pub fn helmet_resealed() -> &'static str {
    "! WARNING: Suit oxygen levels at 0%. Seal integrity compromised.\n\
     \n\
     Your suit's O2 gauge rapidly drops to zero. The room spins as you desperately \
     try to breathe...\n\
     \n\
     You collapse, suffocating in your own suit.\n\
     \n\
     ! GAME OVER"
}

/// The closing lines of the win sequence.
pub fn win_closing() -> &'static str {
    "! Congratulations! You've successfully restored the station's systems!\n\
     The space station will now resume normal operations.\n\
     * Thank you for playing!"
}
