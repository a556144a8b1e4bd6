//! `TerminalMenuView`: the interactive menu rendered on the terminal.

use owo_colors::OwoColorize as _;
use pcinstaller_common::InstallState;

use crate::application::ports::MenuView;
use crate::domain::MenuRow;
use crate::domain::menu::header;
use crate::output::OutputContext;

pub struct TerminalMenuView<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalMenuView<'a> {
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

/// Text shown before reinstalling over an earlier configuration.
#[must_use]
pub fn overwrite_message(conf_name: &str) -> String {
    format!(
        "You have previously used this configurator\n\
         Reinstalling will overwrite the old configuration file, {conf_name}."
    )
}

impl MenuView for TerminalMenuView<'_> {
    fn intro(&self) {
        self.ctx.line("");
        self.ctx.line(
            "We have detected the following applications that are supported by our configurators.",
        );
    }

    fn menu(&self, rows: &[MenuRow]) {
        self.ctx.line("");
        self.ctx.line("The following are the available configurators:");
        self.ctx.header(&header());
        for row in rows {
            println!("{}", row.render().style(self.ctx.styles.state(row.state)));
        }
        self.ctx.line("");
        self.ctx.line(
            "To pick a configurator, type in the corresponding number next to the configurator.\n\
             To quit out of this installer, type \"[Q]uit\" or \"exit\".",
        );
    }

    fn selected(&self, index: usize, app: &str) {
        self.ctx
            .line(&format!("You have selected ({index}) {app} installer"));
    }

    fn overwrite_warning(&self, conf_name: &str) {
        self.ctx.warn(&overwrite_message(conf_name));
    }

    fn invalid_option(&self) {
        self.ctx.reminder("Invalid option.");
    }

    fn outcome(&self, app: &str, state: InstallState) {
        match state {
            InstallState::Installed => self.ctx.success(&format!("{app} configurator finished")),
            InstallState::Incomplete | InstallState::New => {
                self.ctx.error(&format!("{app} configurator did not complete"));
            }
        }
    }

    fn warn(&self, message: &str) {
        self.ctx.warn(message);
    }
}
