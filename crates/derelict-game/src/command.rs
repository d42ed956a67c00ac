//! Command normalization for player input.
//!
//! The normalizer is phrase-based, not grammar-based: a fixed table of
//! synonymous phrasings maps onto one canonical [`Action`], evaluated in a
//! fixed priority order. Matching is case-insensitive except for a handful
//! of legacy single-token shortcuts that are checked against the raw input:
//! `M`/`Move` always mean move, `m`/`map`/`Map` mean the map, and the
//! inventory shortcuts `I`/`inv`/`inventory` are case-sensitive so that a
//! lowercase `i` stays room info.

/// A canonical player action produced by the normalizer.
///
/// Item-taking actions carry an optional argument; `None` means the player
/// typed a bare verb and wants a numbered list to pick from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move between rooms.
    Move,
    /// Search the current room.
    Search,
    /// Pick up an item.
    Take(Option<String>),
    /// Examine an item or fixture.
    Examine(Option<String>),
    /// Show the station map and mission objectives.
    ShowMap,
    /// Show the command list.
    Help,
    /// List carried items.
    ShowInventory,
    /// Show the current room's status page.
    ShowRoomInfo,
    /// Grope around in the dark.
    FeelAround,
    /// The dedicated blow-torch-plus-fuel phrase.
    UseButaneTorch,
    /// The dedicated main-computer phrases.
    UseComputer,
    /// Use a carried item or a visible terminal.
    UseItem(Option<String>),
    /// Drop a carried item.
    Drop(Option<String>),
    /// Anything the tables don't cover; carries the raw input.
    Unrecognized(String),
}

// Raw-case legacy shortcuts. "M"/"Move" outrank the lowercase map
// shortcut "m", and "I" outranks the lowercase room-info shortcut "i".
const MOVE_RAW: &[&str] = &["M", "Move"];
const MAP_RAW: &[&str] = &["m", "map", "Map"];
const INVENTORY_RAW: &[&str] = &["I", "inv", "inventory"];

const MOVE_PHRASES: &[&str] = &[
    "go to next room",
    "open door",
    "go forward",
    "continue forward",
    "proceed",
    "go ahead",
    "next room",
];
const MOVE_SUBSTRINGS: &[&str] = &["move to", "go to"];

const SEARCH_PHRASES: &[&str] = &[
    "look around",
    "check room",
    "search room",
    "examine room",
    "scan room",
    "inspect",
    "investigate",
    "s",
    "search",
];

const TAKE_VERBS: &[&str] = &["g", "grab", "take"];
const TAKE_SUBSTRINGS: &[&str] = &[
    "grab ", "take ", "pick up", "take the", "grab the", "get the",
];

const EXAMINE_VERBS: &[&str] = &["e", "examine"];
const EXAMINE_SUBSTRINGS: &[&str] = &["look at", "check the", "examine the", "inspect the"];

const MAP_PHRASES: &[&str] = &[
    "show map",
    "display map",
    "view map",
    "check map",
    "where am i",
];

const HELP_PHRASES: &[&str] = &[
    "what can i do",
    "show commands",
    "show help",
    "commands",
    "options",
    "help",
    "h",
];

const ROOM_INFO_PHRASES: &[&str] = &["room info", "info", "i"];

const FEEL_AROUND_PHRASES: &[&str] = &[
    "feel around",
    "feel",
    "touch around",
    "fumble around",
    "grope around",
    "reach around",
    "search with hands",
    "search by touch",
    "search in dark",
    "search blindly",
    "feel in dark",
    "feel your way",
    "feel way around",
    "use hands to search",
    "search by feeling",
];

// The dedicated phrases come before the generic use verb so they are
// never shadowed by its substring match.
const BUTANE_TORCH_PHRASES: &[&str] = &["use butane torch", "use blow torch with butane"];

const COMPUTER_PHRASES: &[&str] = &[
    "use computer",
    "use terminal",
    "use computer terminal",
    "use main computer",
    "access computer",
    "access terminal",
    "use main computer system",
    "use computer system",
    "access main computer",
];

const USE_VERBS: &[&str] = &["u", "use"];
const USE_SUBSTRINGS: &[&str] = &["use the ", "use "];

const DROP_VERBS: &[&str] = &["d", "drop"];
const DROP_SUBSTRINGS: &[&str] = &["drop the ", "drop "];

/// Map raw player input to a canonical [`Action`].
///
/// Total over all inputs: anything the tables miss falls through to
/// [`Action::Unrecognized`].
pub fn normalize(input: &str) -> Action {
    let raw = input.trim();
    let lowered = raw.to_lowercase();
    let lower = lowered.as_str();

    if MOVE_RAW.contains(&raw)
        || MOVE_PHRASES.contains(&lower)
        || MOVE_SUBSTRINGS.iter().any(|p| lower.contains(p))
    {
        return Action::Move;
    }
    if SEARCH_PHRASES.contains(&lower) {
        return Action::Search;
    }
    if TAKE_VERBS.contains(&lower) {
        return Action::Take(None);
    }
    if TAKE_SUBSTRINGS.iter().any(|p| lower.contains(p)) {
        return Action::Take(extract_argument(lower));
    }
    if EXAMINE_VERBS.contains(&lower) {
        return Action::Examine(None);
    }
    if EXAMINE_SUBSTRINGS.iter().any(|p| lower.contains(p)) {
        return Action::Examine(extract_argument(lower));
    }
    if MAP_RAW.contains(&raw) || MAP_PHRASES.contains(&lower) {
        return Action::ShowMap;
    }
    if HELP_PHRASES.contains(&lower) {
        return Action::Help;
    }
    if INVENTORY_RAW.contains(&raw) {
        return Action::ShowInventory;
    }
    if ROOM_INFO_PHRASES.contains(&lower) {
        return Action::ShowRoomInfo;
    }
    if FEEL_AROUND_PHRASES.contains(&lower) {
        return Action::FeelAround;
    }
    if BUTANE_TORCH_PHRASES.contains(&lower) {
        return Action::UseButaneTorch;
    }
    if COMPUTER_PHRASES.contains(&lower) {
        return Action::UseComputer;
    }
    if USE_VERBS.contains(&lower) {
        return Action::UseItem(None);
    }
    if USE_SUBSTRINGS.iter().any(|p| lower.contains(p)) {
        return Action::UseItem(extract_argument(lower));
    }
    if DROP_VERBS.contains(&lower) {
        return Action::Drop(None);
    }
    if DROP_SUBSTRINGS.iter().any(|p| lower.contains(p)) {
        return Action::Drop(extract_argument(lower));
    }

    Action::Unrecognized(raw.to_string())
}

/// Pull the argument out of a matched phrase.
///
/// If the phrase contains " the ", the argument is everything after the
/// first occurrence; otherwise everything after the first space. A bare
/// verb yields `None`, which handlers answer with a numbered list.
fn extract_argument(phrase: &str) -> Option<String> {
    let rest = if let Some(pos) = phrase.find(" the ") {
        &phrase[pos + 5..]
    } else if let Some(pos) = phrase.find(' ') {
        &phrase[pos + 1..]
    } else {
        return None;
    };
    let rest = rest.trim();
    (!rest.is_empty()).then(|| rest.to_string())
}

/// The "did you mean" hint for input no table matched.
///
/// Keyed on the lowercased input; falls back to a generic unknown-command
/// message that names the input.
pub fn hint_for(lowered: &str) -> String {
    match lowered {
        "go" => "To move to the next room, try 'move' or 'move to next room'.".to_string(),
        "get" | "grab" | "pickup" => {
            "To pick up items, try 'take' or 'grab' followed by the item name.".to_string()
        }
        "look" | "check" => "To search the room, try 'search' or 'look around'.".to_string(),
        "inventory" | "inv" => "To check your inventory, use 'view inventory'.".to_string(),
        _ => format!("Unknown command '{lowered}'. Type 'help' for available commands."),
    }
}
