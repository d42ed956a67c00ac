//! The game session: one command in, one reply out.
//!
//! [`GameSession`] owns the world state, the RNG for dark searches, and a
//! [`Console`] for the interactive sub-dialogs (numbered menus, security
//! keypads, the diagnostic terminal). Everything else is a pure
//! string-in/string-out transition over [`GameState`].

use derelict_core::{GameState, Inventory, Phase, RoomId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::command::{Action, hint_for, normalize};
use crate::console::Console;
use crate::effects::{BatteryKind, LightSource, UseEffect, effect_for};
use crate::error::{GameError, GameResult};
use crate::narration;
use crate::survival::{self, OxygenTick};
use crate::terminals::{self, GateOutcome, SecurityDoor};

/// Session tunables.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    /// Seed for the dark-search dice.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl GameConfig {
    /// Same config with a different seed.
    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed }
    }
}

/// One run of the game, from the airlock to a win or a death.
pub struct GameSession<C: Console> {
    state: GameState,
    console: C,
    rng: StdRng,
}

impl<C: Console> GameSession<C> {
    /// Start a fresh run.
    pub fn new(console: C, config: GameConfig) -> Self {
        Self {
            state: GameState::new(),
            console,
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// The current world state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access to the world state.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// The console driving interactive sub-dialogs.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Process one player command and return the reply text.
    ///
    /// Every command, recognized or not, advances the survival clocks
    /// first; a finished run answers everything with an empty reply.
    pub fn process(&mut self, input: &str) -> GameResult<String> {
        if self.state.is_over() {
            return Ok(String::new());
        }

        let mut prefix = String::new();
        match survival::tick_oxygen(&mut self.state) {
            OxygenTick::Depleted => {
                self.state.phase = Phase::Lost;
                return Ok(narration::suffocation().to_string());
            }
            OxygenTick::Leaking { remaining } => {
                prefix.push_str(&format!(
                    "! WARNING: Suit oxygen leak active. Commands remaining: {remaining}\n"
                ));
                if remaining <= 3 {
                    prefix.push_str("! CRITICAL: Seal the leak immediately!\n");
                }
            }
            OxygenTick::Sealed => {}
        }

        // The mess hall kills the headlight on the first command after
        // arrival, whatever that command was.
        if self.state.location() == RoomId::MessHall && !self.state.mess_hall_trapped {
            self.state.mess_hall_trapped = true;
            self.state.headlight_on = false;
            self.state.headlight_dead = true;
            return Ok(format!("{prefix}{}", narration::mess_hall_trap()));
        }

        let action = normalize(input);

        // Dark mess-hall searches feed the battery counter instead of the
        // normal search path; the third one turns up fresh batteries.
        if action == Action::Search
            && self.state.location() == RoomId::MessHall
            && !self.state.has_light()
        {
            if survival::record_mess_hall_search(&mut self.state) {
                self.state.headlight_dead = false;
                self.state.headlight_on = true;
                self.state.maintenance_actions = 0;
                // The found pack goes straight into the headlight; the
                // leftovers are only carried when there's room for them.
                if !self.state.inventory.is_full() {
                    self.state.inventory.add(derelict_core::Item::new(
                        "9V Batteries",
                        "A pack of fresh 9-volt batteries.",
                    ))?;
                }
                return Ok(format!("{prefix}{}", narration::batteries_found()));
            }
            return Ok(format!(
                "{prefix}You grope around in the darkness, finding nothing useful."
            ));
        }

        let outcome = match action {
            Action::Move => self.do_move(),
            Action::Search => self.do_search(),
            Action::Take(arg) => self.do_take(arg.as_deref()),
            Action::Examine(arg) => self.do_examine(arg.as_deref()),
            Action::ShowMap => Ok(narration::map(self.state.location())),
            Action::Help => Ok(narration::help()),
            Action::ShowInventory => Ok(self.do_inventory()),
            Action::ShowRoomInfo => Ok(narration::room_info(&self.state)),
            Action::FeelAround => self.do_feel_around(),
            Action::UseButaneTorch => self.do_use_torch(),
            Action::UseComputer => Ok(self.do_use_computer()),
            Action::UseItem(arg) => self.do_use(arg.as_deref()),
            Action::Drop(arg) => self.do_drop(arg.as_deref()),
            Action::Unrecognized(raw) => {
                Err(GameError::Unrecognized(hint_for(&raw.to_lowercase())))
            }
        };
        match outcome {
            Ok(reply) => Ok(format!("{prefix}{reply}")),
            // The leak countdown must still reach the player when the
            // command itself fails.
            Err(error) if !prefix.is_empty() => Ok(format!("{prefix}{error}")),
            Err(error) => Err(error),
        }
    }

    /// True when the player can't see in the current room.
    fn dark_here(&self) -> bool {
        !self.state.has_light()
            && (self.state.location().is_dark()
                || (self.state.location() == RoomId::MessHall && self.state.mess_hall_trapped))
    }

    /// Show a numbered menu and read one selection. `None` means cancel,
    /// from a `0` entry or end of input.
    fn pick(&mut self, header: &str, options: &[&str]) -> GameResult<Option<usize>> {
        self.console.line(header);
        for (index, option) in options.iter().enumerate() {
            self.console.line(&format!("{}. {}", index + 1, option));
        }
        self.console.line("0. Cancel");
        let Some(entry) = self.console.prompt("Enter choice: ") else {
            return Ok(None);
        };
        let choice: usize = entry
            .trim()
            .parse()
            .map_err(|_| GameError::InvalidSelection { max: options.len() })?;
        if choice == 0 {
            return Ok(None);
        }
        if choice > options.len() {
            return Err(GameError::InvalidSelection { max: options.len() });
        }
        Ok(Some(choice - 1))
    }

    /// Move the player into a room, playing first-visit narration once.
    fn arrive(&mut self, room: RoomId) -> String {
        self.state.enter(room);
        let mut reply = format!("* Current Location: {}\n", room.name());
        if self.state.room(room).visited {
            reply.push_str(room.description());
        } else {
            reply.push_str(narration::first_visit(room));
            self.state.room_mut(room).visited = true;
        }
        if survival::tick_headlight(&mut self.state) {
            reply.push_str("\n! Your headlight flickers and dies. The batteries are dead!");
        }
        reply
    }

    fn do_move(&mut self) -> GameResult<String> {
        let here = self.state.location();
        match here {
            RoomId::Airlock => {
                if !self.state.airlock_open {
                    return Ok(
                        "The airlock door is sealed shut. You'll need to find a way to open it."
                            .to_string(),
                    );
                }
                let mut reply =
                    String::from("You pry your way through the opened inner door.\n\n");
                reply.push_str(&self.arrive(RoomId::MaintenanceCorridor));
                Ok(reply)
            }
            RoomId::ControlRoom => {
                match self.pick("Where do you want to go?", &["Back to Mess Hall"])? {
                    Some(0) => Ok(self.arrive(RoomId::MessHall)),
                    _ => Ok("You stay where you are.".to_string()),
                }
            }
            _ => {
                let (Some(back), Some(forward)) = (here.back(), here.forward()) else {
                    return Ok("You stay where you are.".to_string());
                };
                let options = [
                    format!("Back to {}", back.name()),
                    format!("Forward to {}", forward.name()),
                ];
                let options: Vec<&str> = options.iter().map(String::as_str).collect();
                match self.pick("Where do you want to go?", &options)? {
                    Some(0) => Ok(self.arrive(back)),
                    Some(_) => self.move_forward(here, forward),
                    None => Ok("You stay where you are.".to_string()),
                }
            }
        }
    }

    /// Forward movement runs the hazards and gates between rooms.
    fn move_forward(&mut self, here: RoomId, forward: RoomId) -> GameResult<String> {
        match here {
            RoomId::MaintenanceCorridor => {
                // The jagged panel gets everyone exactly once.
                if !self.state.suit_damaged && !self.state.suit_repaired {
                    self.state.suit_damaged = true;
                    return Ok(narration::suit_tear().to_string());
                }
                if self.state.obsdeck_unlocked {
                    return Ok(self.arrive(forward));
                }
                match terminals::security_gate(&mut self.console, SecurityDoor::ObservationDeck) {
                    GateOutcome::Granted => {
                        self.state.obsdeck_unlocked = true;
                        Ok(self.arrive(forward))
                    }
                    GateOutcome::Denied | GateOutcome::Cancelled => Ok(String::new()),
                }
            }
            RoomId::ObservationDeck => {
                // The mess hall door re-locks behind you; the code is asked
                // on every pass.
                match terminals::security_gate(&mut self.console, SecurityDoor::MessHall) {
                    GateOutcome::Granted => Ok(self.arrive(forward)),
                    GateOutcome::Denied | GateOutcome::Cancelled => Ok(String::new()),
                }
            }
            RoomId::MessHall => {
                if !self.state.control_room_open {
                    return Ok("The control room door is sealed shut. The locking mechanism \
                               appears to be damaged."
                        .to_string());
                }
                Ok(self.arrive(forward))
            }
            _ => Ok(self.arrive(forward)),
        }
    }

    fn do_search(&mut self) -> GameResult<String> {
        if self.dark_here() {
            return self.dark_search();
        }
        // Rooms past the corridor have no starlight either; without an
        // active light source a search there doesn't even get a grope.
        if !self.state.has_light() {
            return Ok(
                "! It's too dark to do that. You need to find a light source first.".to_string(),
            );
        }
        let here = self.state.location();
        let mut reply = String::new();
        {
            let room = self.state.room_mut(here);
            room.searched = true;
            if room.is_empty() {
                reply.push_str("* You search the room but find no useful items.");
            } else {
                reply.push_str("After searching the room, you find:");
                for (index, item) in room.items().iter().enumerate() {
                    reply.push_str(&format!("\n    {}. {}", index + 1, item.name()));
                }
            }
        }
        let notices = terminals::search_notices(here);
        if !notices.is_empty() {
            reply.push_str("\n\nYou also notice:");
            for notice in notices {
                reply.push_str(&format!("\n    - {notice}"));
            }
        }
        if survival::tick_headlight(&mut self.state) {
            reply.push_str("\n! Your headlight flickers and dies. The batteries are dead!");
        }
        Ok(reply)
    }

    /// Searching an unlit room: a coin flip for a blind find.
    fn dark_search(&mut self) -> GameResult<String> {
        let here = self.state.location();
        let mut reply = String::from(match here {
            RoomId::Airlock => {
                "You sweep your hands across cold metal surfaces, guided only by the faint \
                 starlight from the porthole."
            }
            _ => "You inch along the wall, feeling past cables and conduit brackets.",
        });
        if self.rng.random_bool(0.5) && !self.state.current_room().is_empty() {
            let count = self.state.current_room().items().len();
            let index = self.rng.random_range(0..count);
            if self.state.inventory.is_full() {
                reply.push_str(
                    "\nYou stumble upon something in the darkness, but your inventory is full!",
                );
            } else if let Some(item) = self.state.current_room_mut().remove_item_at(index) {
                reply.push_str(&format!(
                    "\nDespite the darkness, your hands close around something.\n* You found: {}",
                    item.name()
                ));
                self.state.inventory.add(item)?;
            } else {
                reply.push_str("\nYour fingers brush over something bolted firmly to the wall.");
            }
        } else {
            reply.push_str("\nYou find nothing but cold metal and cables.");
        }
        if here == RoomId::MaintenanceCorridor
            && self.state.maintenance_actions >= survival::HEADLIGHT_BATTERY_BUDGET
        {
            reply.push_str("\n* Somewhere in the darkness ahead, you notice a faint green glow.");
        }
        Ok(reply)
    }

    fn do_feel_around(&mut self) -> GameResult<String> {
        if self.state.has_light() {
            return Ok("You can see clearly with your light source. Try searching instead."
                .to_string());
        }
        if self.state.feel_around_used {
            return Ok("You've already thoroughly felt around this area.".to_string());
        }
        if self.state.current_room().is_empty() {
            self.state.feel_around_used = true;
            return Ok("You feel around but find nothing.".to_string());
        }
        if self.rng.random_bool(0.5) {
            let count = self.state.current_room().items().len();
            let index = self.rng.random_range(0..count);
            if self.state.inventory.is_full() {
                // The attempt isn't spent when there's no room to carry
                // the find.
                return Ok("Your hands close on something, but your inventory is full!"
                    .to_string());
            }
            self.state.feel_around_used = true;
            if let Some(item) = self.state.current_room_mut().remove_item_at(index) {
                let name = item.name().to_string();
                self.state.inventory.add(item)?;
                return Ok(format!(
                    "Groping in the darkness, you find something!\n* You found: {name}"
                ));
            }
        } else {
            self.state.feel_around_used = true;
        }
        Ok("You feel around in the darkness but find nothing useful.".to_string())
    }

    fn do_take(&mut self, arg: Option<&str>) -> GameResult<String> {
        if self.dark_here() {
            return Ok("! The darkness makes it impossible to find anything. You need to find \
                       a light source first."
                .to_string());
        }
        let name = match arg {
            Some(name) => name.to_string(),
            None => {
                let names: Vec<String> = self
                    .state
                    .current_room()
                    .items()
                    .iter()
                    .map(|item| item.name().to_string())
                    .collect();
                if names.is_empty() {
                    return Ok("There's nothing here to take.".to_string());
                }
                let options: Vec<&str> = names.iter().map(String::as_str).collect();
                match self.pick("What do you want to grab?", &options)? {
                    Some(index) => names[index].clone(),
                    None => return Ok("You take nothing.".to_string()),
                }
            }
        };
        let Some(item) = self.state.current_room().find_item(&name) else {
            return Ok("You don't see that here.".to_string());
        };
        if item.is_mounted() {
            return Ok(format!(
                "The {} is securely mounted to the wall and cannot be taken.",
                item.name()
            ));
        }
        if self.state.inventory.is_full() {
            return Ok("Your inventory is full! Drop something first.".to_string());
        }
        if let Some(item) = self.state.current_room_mut().remove_item(&name) {
            let taken = item.name().to_string();
            self.state.inventory.add(item)?;
            Ok(format!("Grabbed: {taken}"))
        } else {
            Ok("You don't see that here.".to_string())
        }
    }

    fn do_examine(&mut self, arg: Option<&str>) -> GameResult<String> {
        if !self.state.has_light() {
            return Ok(
                "! It's too dark to do that. You need to find a light source first.".to_string()
            );
        }
        let name = match arg {
            Some(name) => name.to_string(),
            None => {
                let names: Vec<String> = self
                    .state
                    .inventory
                    .iter()
                    .chain(self.state.current_room().items().iter())
                    .map(|item| item.name().to_string())
                    .collect();
                if names.is_empty() {
                    return Ok("You have nothing to examine.".to_string());
                }
                let options: Vec<&str> = names.iter().map(String::as_str).collect();
                match self.pick("What would you like to examine?", &options)? {
                    Some(index) => names[index].clone(),
                    None => return Ok("You examine nothing.".to_string()),
                }
            }
        };
        // The wall gauge has a live readout rather than an item page.
        if self.state.location() == RoomId::Airlock
            && matches!(
                name.to_lowercase().as_str(),
                "pressure gauge" | "gauge" | "pressure"
            )
        {
            return Ok(narration::pressure_gauge_readout().to_string());
        }
        let Some(item) = self
            .state
            .inventory
            .find(&name)
            .or_else(|| self.state.current_room().find_item(&name))
        else {
            return Ok("You don't see that here.".to_string());
        };
        match item.name() {
            "Repair Manual" => Ok(narration::repair_manual_page().to_string()),
            "ASCII Table" => Ok(narration::ascii_table_page().to_string()),
            _ => Ok(format!("Item: {}\n\n{}", item.name(), item.description())),
        }
    }

    fn do_use(&mut self, arg: Option<&str>) -> GameResult<String> {
        let name = match arg {
            Some(name) => name.to_string(),
            None => {
                let mut names: Vec<String> = self
                    .state
                    .inventory
                    .iter()
                    .map(|item| item.name().to_string())
                    .collect();
                if self.state.current_room().searched
                    && let Some(terminal) = terminals::terminal_in(self.state.location())
                {
                    names.push(terminal.to_string());
                }
                if names.is_empty() {
                    return Ok("You have no items to use.".to_string());
                }
                let options: Vec<&str> = names.iter().map(String::as_str).collect();
                match self.pick("Which item do you want to use?", &options)? {
                    Some(index) => names[index].clone(),
                    None => return Ok("You use nothing.".to_string()),
                }
            }
        };
        if name.to_lowercase().contains("terminal") {
            return Ok(self.use_terminal_here());
        }
        if !self.state.inventory.contains(&name) {
            return Ok("You don't have that item.".to_string());
        }
        self.apply_effect(&name)
    }

    /// Route a terminal use to whichever console this room houses.
    fn use_terminal_here(&mut self) -> String {
        match self.state.location() {
            RoomId::MaintenanceCorridor => {
                terminals::life_support_terminal(&mut self.console, &mut self.state)
            }
            RoomId::ObservationDeck => {
                terminals::navigation_terminal(&mut self.console, &mut self.state)
            }
            RoomId::ControlRoom => terminals::main_computer(&mut self.console, &mut self.state),
            _ => "There is no terminal here.".to_string(),
        }
    }

    fn do_use_computer(&mut self) -> String {
        if self.state.location() == RoomId::ControlRoom {
            terminals::main_computer(&mut self.console, &mut self.state)
        } else {
            "There is no computer terminal here.".to_string()
        }
    }

    fn do_use_torch(&mut self) -> GameResult<String> {
        if !self.state.inventory.contains("Blow Torch") {
            return Ok("You need a blow torch first.".to_string());
        }
        self.use_torch_here()
    }

    fn use_torch_here(&mut self) -> GameResult<String> {
        if self.state.location() != RoomId::MessHall {
            return Ok("There's nothing here that needs cutting.".to_string());
        }
        if self.state.control_room_open {
            return Ok("The control room door is already cut open.".to_string());
        }
        if !self.state.inventory.contains("Butane Canister") {
            return Ok("The blow torch needs fuel to work.".to_string());
        }
        self.state.inventory.remove("Butane Canister");
        self.state.control_room_open = true;
        Ok("You connect the butane canister to the blow torch and ignite it.\n\
            The flame bites into the control room door's lock. After a tense minute, the \
            mechanism glows, sags, and gives way.\n\
            * The way to the Control Room is open."
            .to_string())
    }

    /// The single place item effects are interpreted, after possession
    /// checks.
    fn apply_effect(&mut self, name: &str) -> GameResult<String> {
        match effect_for(name) {
            UseEffect::Light(LightSource::Headlight) => {
                if self.state.headlight_on {
                    Ok("Your headlight is already on.".to_string())
                } else if self.state.headlight_dead {
                    Ok("You try the switch, but the headlight's batteries are dead.".to_string())
                } else {
                    self.state.headlight_on = true;
                    Ok("You turn on your headlight, illuminating the area.".to_string())
                }
            }
            UseEffect::Light(LightSource::GlowStick) => {
                if self.state.glow_stick_lit {
                    Ok("The glow stick is already glowing.".to_string())
                } else if self.state.has_light() {
                    Ok("You already have light. Best to save the glow stick.".to_string())
                } else {
                    self.state.glow_stick_lit = true;
                    Ok("You crack the glow stick. A pale green light spreads around you."
                        .to_string())
                }
            }
            UseEffect::OpenAirlock => {
                if self.state.location() != RoomId::Airlock {
                    Ok("There's nothing here that needs prying open.".to_string())
                } else if self.state.airlock_open {
                    Ok("The inner door is already pried open.".to_string())
                } else {
                    self.state.airlock_open = true;
                    Ok("You wedge the crowbar into the inner door's seam and heave. With a \
                        groan of metal, the door gives way."
                        .to_string())
                }
            }
            UseEffect::RepairSuit => {
                if self.state.suit_damaged && !self.state.suit_repaired {
                    self.state.suit_repaired = true;
                    self.state.suit_damaged = false;
                    Ok("You quickly apply the duct tape to seal the tear in your suit. The \
                        oxygen leak stops.\nIt's not pretty, but it'll hold."
                        .to_string())
                } else {
                    Ok("You can't use that here.".to_string())
                }
            }
            UseEffect::CutWires => {
                if self.state.location() == RoomId::MaintenanceCorridor {
                    Ok("You snip a few sparking wires clear of the walkway. The corridor is \
                        marginally safer."
                        .to_string())
                } else {
                    Ok("There are no exposed wires that need cutting here.".to_string())
                }
            }
            UseEffect::FuelTorch => self.use_torch_here(),
            UseEffect::Batteries(kind) => {
                if !self.state.headlight_dead {
                    return Ok("You can't use that here.".to_string());
                }
                let battery = match kind {
                    BatteryKind::NineVolt => {
                        self.state.mess_hall_searches = 0;
                        "9V Batteries"
                    }
                    BatteryKind::Spare => {
                        self.state.maintenance_actions = 0;
                        "Spare Batteries"
                    }
                };
                self.state.inventory.remove(battery);
                self.state.headlight_dead = false;
                self.state.headlight_on = true;
                Ok("You swap the fresh batteries into your headlight. It snaps back to life."
                    .to_string())
            }
            UseEffect::FatalSnack => {
                self.console
                    .line("You eye the energy bar. Eating it means breaking your helmet seal.");
                self.console.line("1. Remove your helmet completely");
                self.console
                    .line("2. Crack the seal just enough for a quick bite");
                self.console.line("0. Think better of it");
                self.console.pause(2);
                let Some(entry) = self.console.prompt("Enter choice: ") else {
                    return Ok("You think better of it and leave the helmet sealed.".to_string());
                };
                match entry.trim() {
                    "1" => {
                        self.state.phase = Phase::Lost;
                        Ok(narration::helmet_removed().to_string())
                    }
                    "2" => {
                        self.state.phase = Phase::Lost;
                        Ok(narration::helmet_resealed().to_string())
                    }
                    _ => Ok("You fumble with the helmet, managing to reseal it just in time."
                        .to_string()),
                }
            }
            UseEffect::RadioStatic => Ok("You key the radio. A wall of static answers.\n\
                 Somewhere in the noise you think you hear a voice, but it slips away."
                .to_string()),
            UseEffect::NoEffect => Ok("You can't use that here.".to_string()),
        }
    }

    fn do_drop(&mut self, arg: Option<&str>) -> GameResult<String> {
        let name = match arg {
            Some(name) => name.to_string(),
            None => {
                if self.state.inventory.is_empty() {
                    return Ok("You have no items to drop.".to_string());
                }
                let names: Vec<String> = self
                    .state
                    .inventory
                    .iter()
                    .map(|item| item.name().to_string())
                    .collect();
                let options: Vec<&str> = names.iter().map(String::as_str).collect();
                match self.pick("What do you want to drop?", &options)? {
                    Some(index) => names[index].clone(),
                    None => return Ok("You drop nothing.".to_string()),
                }
            }
        };
        let Some(item) = self.state.inventory.find(&name) else {
            return Ok("You don't have that item.".to_string());
        };
        let item_name = item.name().to_string();
        let sole_headlight =
            item_name == "Headlight" && self.state.headlight_on && !self.state.glow_stick_lit;
        let sole_glow =
            item_name == "Glow Stick" && self.state.glow_stick_lit && !self.state.headlight_on;
        if self.state.location().is_dark() && (sole_headlight || sole_glow) {
            return Ok("! You can't drop your only light source in a dark area!".to_string());
        }
        if let Some(item) = self.state.inventory.remove(&name) {
            let dropped = item.name().to_string();
            self.state.current_room_mut().add_item(item);
            Ok(format!("Dropped: {dropped}"))
        } else {
            Ok("You don't have that item.".to_string())
        }
    }

    fn do_inventory(&self) -> String {
        if self.state.inventory.is_empty() {
            return "Your inventory is empty.".to_string();
        }
        let mut reply = format!(
            "Inventory ({}/{} items):",
            self.state.inventory.len(),
            Inventory::CAPACITY
        );
        for (index, item) in self.state.inventory.iter().enumerate() {
            reply.push_str(&format!("\n    {}. {}", index + 1, item.name()));
        }
        reply
    }
}

#[cfg(test)]
mod tests {
    use derelict_core::OXYGEN_BUDGET;

    use super::*;
    use crate::console::ScriptedConsole;

    fn session() -> GameSession<ScriptedConsole> {
        GameSession::new(ScriptedConsole::new(), GameConfig::default())
    }

    fn scripted(input: &[&str]) -> GameSession<ScriptedConsole> {
        GameSession::new(ScriptedConsole::with_input(input), GameConfig::default())
    }

    fn run(session: &mut GameSession<ScriptedConsole>, input: &str) -> String {
        session.process(input).unwrap()
    }

    #[test]
    fn sealed_airlock_blocks_movement() {
        let mut game = session();
        let reply = run(&mut game, "M");
        assert!(reply.contains("sealed shut"));
        assert_eq!(game.state().location(), RoomId::Airlock);
    }

    #[test]
    fn unrecognized_input_is_an_error_with_a_hint() {
        let mut game = session();
        let err = game.process("xyzzy").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown command 'xyzzy'. Type 'help' for available commands."
        );
        let err = game.process("go").unwrap_err();
        assert!(err.to_string().contains("'move'"));
    }

    #[test]
    fn menu_rejects_out_of_range_selections() {
        let mut game = scripted(&["99"]);
        run(&mut game, "use the headlight");
        let err = game.process("g").unwrap_err();
        assert!(err.to_string().contains("between 0 and 3"));
    }

    #[test]
    fn headlight_lights_the_airlock() {
        let mut game = session();
        let reply = run(&mut game, "use the headlight");
        assert!(reply.contains("turn on your headlight"));
        assert!(game.state().has_light());
        let reply = run(&mut game, "use the headlight");
        assert!(reply.contains("already on"));
    }

    #[test]
    fn dark_take_is_refused() {
        let mut game = session();
        let reply = run(&mut game, "take the crowbar");
        assert!(reply.contains("darkness makes it impossible"));
        assert!(!game.state().inventory.contains("Crowbar"));
    }

    #[test]
    fn mounted_gauge_cannot_be_taken_but_reads_out() {
        let mut game = session();
        run(&mut game, "use the headlight");
        let reply = run(&mut game, "take the pressure gauge");
        assert!(reply.contains("securely mounted"));
        let reply = run(&mut game, "examine the gauge");
        assert!(reply.contains("Main Hull: 68% nominal pressure"));
    }

    #[test]
    fn sole_light_source_cannot_be_dropped_in_the_dark() {
        let mut game = session();
        run(&mut game, "use the headlight");
        run(&mut game, "take the crowbar");
        let reply = run(&mut game, "drop the headlight");
        assert!(reply.contains("only light source"));
        assert!(game.state().inventory.contains("Headlight"));
        let reply = run(&mut game, "drop the crowbar");
        assert_eq!(reply, "Dropped: Crowbar");
        assert!(game.state().current_room().find_item("Crowbar").is_some());
    }

    #[test]
    fn map_marks_the_current_location() {
        let mut game = session();
        let reply = run(&mut game, "m");
        assert!(reply.contains("  -->  Airlock"));
    }

    #[test]
    fn inventory_listing_counts_items() {
        let mut game = session();
        let reply = run(&mut game, "I");
        assert_eq!(reply, "Inventory (1/7 items):\n    1. Headlight");
        run(&mut game, "use the headlight");
        run(&mut game, "take the crowbar");
        let reply = run(&mut game, "inv");
        assert!(reply.starts_with("Inventory (2/7 items):"));
    }

    #[test]
    fn oxygen_leak_counts_down_to_suffocation() {
        let mut game = session();
        game.state_mut().suit_damaged = true;
        let reply = run(&mut game, "h");
        assert!(reply.contains(&format!(
            "Commands remaining: {}",
            OXYGEN_BUDGET - 1
        )));
        for _ in 0..OXYGEN_BUDGET - 2 {
            run(&mut game, "h");
        }
        assert_eq!(game.state().oxygen_remaining, 1);
        let reply = run(&mut game, "h");
        assert!(reply.contains("oxygen supply is depleted"));
        assert_eq!(game.state().phase, Phase::Lost);
        // A finished run ignores further commands.
        assert_eq!(run(&mut game, "h"), "");
    }

    #[test]
    fn duct_tape_stops_the_leak() {
        let mut game = session();
        game.state_mut().suit_damaged = true;
        game.state_mut().inventory.remove("Headlight");
        game.state_mut()
            .inventory
            .add(derelict_core::Item::new("Duct Tape", "Tape."))
            .unwrap();
        let reply = run(&mut game, "use the duct tape");
        assert!(reply.contains("oxygen leak stops"));
        assert!(game.state().suit_repaired);
        let reply = run(&mut game, "h");
        assert!(!reply.contains("WARNING"));
    }

    #[test]
    fn critical_warning_appears_in_the_last_three_commands() {
        let mut game = session();
        game.state_mut().suit_damaged = true;
        game.state_mut().oxygen_remaining = 4;
        let reply = run(&mut game, "h");
        assert!(reply.contains("Commands remaining: 3"));
        assert!(reply.contains("CRITICAL: Seal the leak immediately!"));
    }

    #[test]
    fn feel_around_is_once_per_visit_and_respects_capacity() {
        for seed in 0..16 {
            let mut game = GameSession::new(
                ScriptedConsole::new(),
                GameConfig::default().with_seed(seed),
            );
            let first = run(&mut game, "feel around");
            if first.contains("inventory is full") {
                // Not possible with one held item.
                panic!("full-inventory refusal with a near-empty inventory");
            }
            let again = run(&mut game, "feel around");
            assert!(
                again.contains("already thoroughly felt around"),
                "seed {seed}: {again}"
            );
            assert!(game.state().inventory.len() <= Inventory::CAPACITY);
        }
    }

    #[test]
    fn feel_around_with_light_suggests_searching() {
        let mut game = session();
        run(&mut game, "use the headlight");
        let reply = run(&mut game, "feel around");
        assert!(reply.contains("Try searching instead"));
    }

    #[test]
    fn dark_search_never_loses_items() {
        for seed in 0..16 {
            let mut game = GameSession::new(
                ScriptedConsole::new(),
                GameConfig::default().with_seed(seed),
            );
            let in_room = game.state().current_room().items().len();
            let held = game.state().inventory.len();
            run(&mut game, "s");
            let now_in_room = game.state().current_room().items().len();
            let now_held = game.state().inventory.len();
            assert_eq!(in_room + held, now_in_room + now_held, "seed {seed}");
        }
    }

    #[test]
    fn lit_search_reveals_items_and_terminals() {
        let mut game = session();
        run(&mut game, "use the headlight");
        run(&mut game, "take the crowbar");
        run(&mut game, "use the crowbar");
        assert!(game.state().airlock_open);
        run(&mut game, "M");
        assert_eq!(game.state().location(), RoomId::MaintenanceCorridor);
        let reply = run(&mut game, "s");
        assert!(reply.contains("After searching the room, you find:"));
        assert!(reply.contains("Glow Stick"));
        assert!(reply.contains("Sticky Note"));
        assert!(reply.contains(
            "You also notice:\n    - An Observation Deck Security Terminal\n    \
             - A Life Support System Terminal"
        ));
        assert!(game.state().current_room().searched);
    }

    #[test]
    fn lightless_search_and_examine_refused_past_the_corridor() {
        let mut game = session();
        game.state_mut().enter(RoomId::ObservationDeck);
        let reply = run(&mut game, "s");
        assert!(reply.contains("too dark to do that"));
        assert!(!game.state().current_room().searched);
        assert!(game.state().current_room().find_item("Radio").is_some());
        let reply = run(&mut game, "examine the radio");
        assert!(reply.contains("too dark to do that"));
        assert!(!reply.contains("Item: Radio"));
    }

    #[test]
    fn leak_warning_survives_a_failed_command() {
        let mut game = scripted(&["99"]);
        game.state_mut().suit_damaged = true;
        let reply = run(&mut game, "xyzzy");
        assert!(reply.contains("WARNING: Suit oxygen leak active"));
        assert!(reply.contains("Unknown command 'xyzzy'"));
        assert_eq!(game.state().oxygen_remaining, OXYGEN_BUDGET - 1);
        // A bad menu pick keeps the countdown visible too.
        run(&mut game, "use the headlight");
        let reply = run(&mut game, "g");
        assert!(reply.contains("WARNING: Suit oxygen leak active"));
        assert!(reply.contains("between 0 and 3"));
    }

    #[test]
    fn first_forward_attempt_from_the_corridor_tears_the_suit() {
        let mut game = scripted(&["2", "2", "9572"]);
        run(&mut game, "use the headlight");
        run(&mut game, "take the crowbar");
        run(&mut game, "use the crowbar");
        run(&mut game, "M");
        let reply = run(&mut game, "M");
        assert!(reply.contains("suit catches on a jagged piece of torn metal"));
        assert!(game.state().suit_damaged);
        assert_eq!(game.state().location(), RoomId::MaintenanceCorridor);
        // The second attempt reaches the security gate and passes it.
        let reply = run(&mut game, "M");
        assert!(reply.contains("Current Location: Observation Deck"));
        assert!(game.state().obsdeck_unlocked);
    }

    #[test]
    fn wrong_gate_code_goes_nowhere() {
        let mut game = scripted(&["2", "2", "1111"]);
        run(&mut game, "use the headlight");
        run(&mut game, "take the crowbar");
        run(&mut game, "use the crowbar");
        run(&mut game, "M");
        run(&mut game, "M"); // tears the suit
        game.state_mut().suit_repaired = true;
        game.state_mut().suit_damaged = false;
        run(&mut game, "M");
        assert_eq!(game.state().location(), RoomId::MaintenanceCorridor);
        assert!(!game.state().obsdeck_unlocked);
        assert!(game.console().printed("ACCESS DENIED"));
    }

    #[test]
    fn headlight_batteries_die_after_fifteen_actions() {
        let mut game = scripted(&["2"]);
        run(&mut game, "use the headlight");
        run(&mut game, "take the crowbar");
        run(&mut game, "use the crowbar");
        run(&mut game, "M"); // corridor, action 1
        for _ in 0..13 {
            run(&mut game, "s"); // actions 2..14
        }
        assert!(game.state().headlight_on);
        let reply = run(&mut game, "s"); // action 15
        assert!(reply.contains("headlight flickers and dies"));
        assert!(game.state().headlight_dead);
        // Dark searching now hints at the glow stick.
        let reply = run(&mut game, "s");
        assert!(reply.contains("faint green glow"));
    }

    #[test]
    fn golden_path_restores_the_station() {
        let mut game = scripted(&["2", "2", "9572", "2", "9572", "2", "password"]);

        run(&mut game, "use the headlight");
        assert_eq!(run(&mut game, "take the crowbar"), "Grabbed: Crowbar");
        assert_eq!(run(&mut game, "take the duct tape"), "Grabbed: Duct Tape");
        run(&mut game, "use the crowbar");
        run(&mut game, "M");
        assert_eq!(game.state().location(), RoomId::MaintenanceCorridor);
        run(&mut game, "s");

        // First forward attempt tears the suit; tape it and move on.
        let reply = run(&mut game, "M");
        assert!(reply.contains("Suit integrity compromised"));
        let reply = run(&mut game, "use the duct tape");
        assert!(reply.contains("WARNING: Suit oxygen leak active"));
        assert!(reply.contains("oxygen leak stops"));

        let reply = run(&mut game, "M");
        assert!(reply.contains("Current Location: Observation Deck"));
        assert_eq!(run(&mut game, "take the blow torch"), "Grabbed: Blow Torch");
        assert_eq!(
            run(&mut game, "take the circuit board"),
            "Grabbed: Circuit Board"
        );

        let reply = run(&mut game, "M");
        assert!(reply.contains("Current Location: Mess Hall"));

        // The first command here springs the battery trap; three dark
        // searches recover the spares.
        let reply = run(&mut game, "s");
        assert!(reply.contains("plunged into darkness"));
        run(&mut game, "s");
        run(&mut game, "s");
        let reply = run(&mut game, "s");
        assert!(reply.contains("You found: 9V Batteries"));
        assert!(game.state().headlight_on);

        assert!(game.state().inventory.contains("9V Batteries"));

        run(&mut game, "s");
        assert_eq!(
            run(&mut game, "take the butane canister"),
            "Grabbed: Butane Canister"
        );
        assert!(game.state().inventory.is_full());
        let reply = run(&mut game, "use butane torch");
        assert!(reply.contains("way to the Control Room is open"));
        assert!(!game.state().inventory.contains("Butane Canister"));

        let reply = run(&mut game, "M");
        assert!(reply.contains("Current Location: Control Room"));
        let reply = run(&mut game, "use computer");
        assert!(reply.contains("Congratulations"));
        assert_eq!(game.state().phase, Phase::Won);
        assert!(game.state().computer_fixed);
        assert!(game.state().navigation_fixed);
        assert!(game.state().life_support_fixed);
        assert_eq!(run(&mut game, "s"), "");
    }

    #[test]
    fn status_commands_leave_the_state_unchanged() {
        let mut game = session();
        run(&mut game, "use the headlight");
        for _ in 0..2 {
            for command in ["i", "m", "h", "I", "room info"] {
                run(&mut game, command);
            }
        }
        assert_eq!(game.state().location(), RoomId::Airlock);
        assert_eq!(game.state().inventory.len(), 1);
        assert!(!game.state().current_room().searched);
        assert_eq!(game.state().oxygen_remaining, OXYGEN_BUDGET);
        assert_eq!(game.state().phase, Phase::Active);
    }

    #[test]
    fn unlocked_gate_round_trips_without_reasking() {
        let mut game = scripted(&["2", "2", "9572", "1", "2"]);
        run(&mut game, "use the headlight");
        run(&mut game, "take the crowbar");
        run(&mut game, "use the crowbar");
        run(&mut game, "M");
        run(&mut game, "M"); // tears the suit
        game.state_mut().suit_repaired = true;
        game.state_mut().suit_damaged = false;
        run(&mut game, "M");
        assert_eq!(game.state().location(), RoomId::ObservationDeck);
        run(&mut game, "M"); // back
        assert_eq!(game.state().location(), RoomId::MaintenanceCorridor);
        run(&mut game, "M"); // forward again, no gate this time
        assert_eq!(game.state().location(), RoomId::ObservationDeck);
        assert!(game.state().obsdeck_unlocked);
        let code_prompts = game
            .console()
            .transcript()
            .iter()
            .filter(|line| line.contains("Enter security code"))
            .count();
        assert_eq!(code_prompts, 1);
    }

    #[test]
    fn control_room_door_is_sealed_without_the_torch() {
        let mut game = scripted(&["2", "2", "9572", "2", "9572", "2"]);
        run(&mut game, "use the headlight");
        run(&mut game, "take the crowbar");
        run(&mut game, "use the crowbar");
        run(&mut game, "M");
        run(&mut game, "M"); // tear
        game.state_mut().suit_repaired = true;
        game.state_mut().suit_damaged = false;
        run(&mut game, "M"); // gate, obs deck
        run(&mut game, "M"); // gate, mess hall
        run(&mut game, "h"); // springs the trap
        run(&mut game, "s");
        run(&mut game, "s");
        run(&mut game, "s"); // batteries recovered
        let reply = run(&mut game, "M");
        assert!(reply.contains("locking mechanism appears to be damaged"));
        assert_eq!(game.state().location(), RoomId::MessHall);
    }

    #[test]
    fn energy_bar_choices_are_fatal() {
        for (choice, fragment) in [("1", "toxic atmosphere"), ("2", "suffocating in your own suit")] {
            let mut game = scripted(&[choice]);
            game.state_mut()
                .inventory
                .add(derelict_core::Item::new("Energy Bar", "A ration."))
                .unwrap();
            let reply = run(&mut game, "use the energy bar");
            assert!(reply.contains(fragment), "choice {choice}: {reply}");
            assert_eq!(game.state().phase, Phase::Lost);
        }
        // Backing out reseals the helmet in time.
        let mut game = scripted(&["0"]);
        game.state_mut()
            .inventory
            .add(derelict_core::Item::new("Energy Bar", "A ration."))
            .unwrap();
        let reply = run(&mut game, "use the energy bar");
        assert!(reply.contains("reseal it just in time"));
        assert_eq!(game.state().phase, Phase::Active);
    }

    #[test]
    fn examine_reads_the_manual_pages() {
        let mut game = session();
        game.state_mut()
            .inventory
            .add(derelict_core::Item::new("Repair Manual", "A manual."))
            .unwrap();
        run(&mut game, "use the headlight");
        let reply = run(&mut game, "examine the repair manual");
        assert!(reply.contains("CRITICAL SYSTEMS STATUS"));
        let reply = run(&mut game, "examine the headlight");
        assert!(reply.contains("Item: Headlight"));
    }

    #[test]
    fn secondary_terminals_unlock_after_the_computer() {
        let mut game = session();
        game.state_mut().enter(RoomId::ObservationDeck);
        game.state_mut().room_mut(RoomId::ObservationDeck).searched = true;
        let reply = run(&mut game, "use the navigation system terminal");
        assert!(reply.contains("locked out"));
        game.state_mut().computer_fixed = true;
        let reply = run(&mut game, "use the navigation system terminal");
        assert!(reply.contains("Star Chart and Telescope Lens"));
        run(&mut game, "take the star chart");
        run(&mut game, "take the telescope lens");
        let reply = run(&mut game, "use the navigation system terminal");
        assert!(reply.contains("recalibrated"));
        assert!(game.state().navigation_fixed);
    }
}
