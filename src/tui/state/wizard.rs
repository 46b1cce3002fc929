// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Setup wizard state machine
//!
//! The wizard walks through three fixed steps. Instead of a step counter
//! clamped to a range, the position is a closed enum with explicit
//! transition functions: advancing past the last step reports completion
//! and retreating from the first reports an exit back to the welcome
//! screen, so out-of-range steps cannot exist.
//!
//! Selections live only in this struct. They are never written to disk;
//! completing or leaving the wizard discards them.

/// Default install location offered by the wizard
pub const DEFAULT_INSTALL_DIR: &str = "/Applications/Nyra";

/// Default data location offered by the wizard
pub const DEFAULT_DATA_DIR: &str = "~/Documents/Nyra";

/// One of the three wizard panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Choose the installation directory
    Install,
    /// Choose the data directory
    Data,
    /// Tabbed preference toggles
    Preferences,
}

impl WizardStep {
    pub fn all() -> &'static [WizardStep] {
        &[WizardStep::Install, WizardStep::Data, WizardStep::Preferences]
    }

    /// 1-based position for progress display
    pub fn position(&self) -> usize {
        match self {
            WizardStep::Install => 1,
            WizardStep::Data => 2,
            WizardStep::Preferences => 3,
        }
    }

    pub fn count() -> usize {
        Self::all().len()
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Install => "Installation Location",
            WizardStep::Data => "Data Storage",
            WizardStep::Preferences => "Preferences",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::Install => "Choose where to install Nyra on your system",
            WizardStep::Data => "Configure where Nyra will store your data and preferences",
            WizardStep::Preferences => "Customize your Nyra experience",
        }
    }
}

/// Result of asking the wizard to move forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the next step
    Advanced(WizardStep),
    /// Already on the last step; setup is done
    Completed,
}

/// Result of asking the wizard to move backward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetreatOutcome {
    /// Moved to the previous step
    Retreated(WizardStep),
    /// Already on the first step; leave setup entirely
    ExitToWelcome,
}

/// Tab within the preferences step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefsTab {
    General,
    Privacy,
}

impl PrefsTab {
    pub fn all() -> &'static [PrefsTab] {
        &[PrefsTab::General, PrefsTab::Privacy]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrefsTab::General => "General",
            PrefsTab::Privacy => "Privacy",
        }
    }

    pub fn next(&self) -> PrefsTab {
        match self {
            PrefsTab::General => PrefsTab::Privacy,
            PrefsTab::Privacy => PrefsTab::General,
        }
    }
}

/// The wizard's working selections
///
/// No validation is applied between steps; empty directory fields are
/// accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupSelections {
    pub install_dir: String,
    pub data_dir: String,
    pub telemetry_enabled: bool,
    pub auto_start_enabled: bool,
}

impl Default for SetupSelections {
    fn default() -> Self {
        Self {
            install_dir: DEFAULT_INSTALL_DIR.to_string(),
            data_dir: DEFAULT_DATA_DIR.to_string(),
            telemetry_enabled: true,
            auto_start_enabled: false,
        }
    }
}

/// Wizard state: current step plus in-flight selections
#[derive(Debug, Clone)]
pub struct Wizard {
    step: WizardStep,
    pub selections: SetupSelections,
    pub prefs_tab: PrefsTab,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(SetupSelections::default())
    }
}

impl Wizard {
    pub fn new(selections: SetupSelections) -> Self {
        Self {
            step: WizardStep::Install,
            selections,
            prefs_tab: PrefsTab::General,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Move to the next step, or report completion from the last one
    pub fn advance(&mut self) -> AdvanceOutcome {
        match self.step {
            WizardStep::Install => {
                self.step = WizardStep::Data;
                AdvanceOutcome::Advanced(self.step)
            }
            WizardStep::Data => {
                self.step = WizardStep::Preferences;
                AdvanceOutcome::Advanced(self.step)
            }
            WizardStep::Preferences => AdvanceOutcome::Completed,
        }
    }

    /// Move to the previous step, or report an exit from the first one
    pub fn retreat(&mut self) -> RetreatOutcome {
        match self.step {
            WizardStep::Install => RetreatOutcome::ExitToWelcome,
            WizardStep::Data => {
                self.step = WizardStep::Install;
                RetreatOutcome::Retreated(self.step)
            }
            WizardStep::Preferences => {
                self.step = WizardStep::Data;
                RetreatOutcome::Retreated(self.step)
            }
        }
    }

    /// Completion ratio for the progress bar, in `0.0..=1.0`
    pub fn progress(&self) -> f64 {
        self.step.position() as f64 / WizardStep::count() as f64
    }

    /// Switch to the other preferences tab
    pub fn cycle_prefs_tab(&mut self) {
        self.prefs_tab = self.prefs_tab.next();
    }

    pub fn toggle_auto_start(&mut self) {
        self.selections.auto_start_enabled = !self.selections.auto_start_enabled;
    }

    pub fn toggle_telemetry(&mut self) {
        self.selections.telemetry_enabled = !self.selections.telemetry_enabled;
    }

    /// Mocked folder picker: assigns the fixed default for the current
    /// directory step. A native dialog is out of scope for the terminal.
    pub fn browse_current(&mut self) {
        match self.step {
            WizardStep::Install => self.selections.install_dir = DEFAULT_INSTALL_DIR.to_string(),
            WizardStep::Data => self.selections.data_dir = DEFAULT_DATA_DIR.to_string(),
            WizardStep::Preferences => {}
        }
    }

    /// Finish the wizard, consuming it and its selections
    pub fn into_selections(self) -> SetupSelections {
        self.selections
    }
}
