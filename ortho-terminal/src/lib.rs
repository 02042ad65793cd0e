/// Interactive terminal front end for the orthographic viewer
use crossterm::{
    cursor, queue,
    style::Print,
    terminal::{self, ClearType},
};
use std::io::{self, BufRead, Write};
use ortho_core::{parse_command, parse_integer, Command, Model, ViewAxis, ViewState};

pub mod config;
pub mod error;
pub mod renderer;

pub use config::Config;
pub use error::{AppError, Result};
pub use renderer::{AsciiRenderer, Frame};

pub const MENU: &str = "Commands: (v) View Axis, (c<axis>[n]) Set Camera, (s) Scale, \
                        (x,y,z) Camera Position, (b) Next Vertex, (q) Quit";
pub const PROMPT: &str = "> ";

/// Command loop: draw a frame, read a command, update the view, repeat
pub struct TerminalApp<R, W> {
    model: Model,
    state: ViewState,
    renderer: AsciiRenderer,
    input: R,
    output: W,
    clear_screen: bool,
    notice: Option<String>,
    running: bool,
}

impl<R: BufRead, W: Write> TerminalApp<R, W> {
    pub fn new(model: Model, state: ViewState, input: R, output: W) -> Self {
        Self {
            model,
            state,
            renderer: AsciiRenderer::default(),
            input,
            output,
            clear_screen: true,
            notice: None,
            running: true,
        }
    }

    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Message left by the last command, shown under the next frame
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until a quit command or the end of input
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("viewer started");

        while self.running {
            self.render()?;

            let Some(line) = self.read_line()? else {
                tracing::info!("input closed");
                break;
            };
            self.execute(parse_command(&line))?;
        }

        tracing::info!("viewer stopped");
        Ok(())
    }

    /// Draw one frame followed by the menu and the command prompt.
    ///
    /// If the selected vertex fell outside the canvas the selection is reset
    /// to the first vertex once the frame is drawn.
    pub fn render(&mut self) -> Result<()> {
        if self.clear_screen {
            queue!(
                self.output,
                terminal::Clear(ClearType::All),
                cursor::MoveTo(0, 0)
            )?;
        }

        queue!(self.output, Print(format!("{}\n", self.state.header())))?;

        let frame = self.renderer.render_model(&self.model, &self.state);
        self.renderer.draw(&mut self.output)?;

        if !frame.selection_visible {
            tracing::debug!(selected = self.state.selected, "selection out of view, resetting");
            self.state.reset_selection();
        }

        if let Some(notice) = self.notice.take() {
            queue!(self.output, Print(format!("{notice}\n")))?;
        }
        queue!(self.output, Print(format!("{MENU}\n")), Print(PROMPT))?;
        self.output.flush()?;
        Ok(())
    }

    /// Apply one parsed command, prompting for missing arguments
    pub fn execute(&mut self, command: Command) -> Result<()> {
        tracing::debug!(?command, "dispatching command");

        match command {
            Command::SetView(axis) => self.state.set_axis(axis),
            Command::PromptView => {
                let answer = self.prompt("Enter new view axis (X/Y/Z): ")?;
                let axis = answer.parse::<ViewAxis>().unwrap_or_else(|err| {
                    tracing::warn!(%err, "falling back to Z view");
                    ViewAxis::Z
                });
                self.state.set_axis(axis);
            }
            Command::SetCamera(axis, value) => self.state.set_camera(axis, value),
            Command::PromptCamera(axis) => {
                let text = format!("Enter new camera {axis} position (integer): ");
                let value = self.prompt_integer(&text)?.unwrap_or_else(|| {
                    self.set_notice("Invalid position. Setting to 0.");
                    0
                });
                self.state.set_camera(axis, value);
            }
            Command::PromptPosition(axis) => {
                let text = format!("Enter new camera {axis} position (integer): ");
                let value = self.prompt_integer(&text)?.unwrap_or(0);
                self.state.set_camera(axis, value);
            }
            Command::InvalidCameraValue => self.set_notice("Invalid value. Position not set."),
            Command::InvalidAxis => self.set_notice("Invalid axis. Use 'x', 'y', or 'z'."),
            Command::SetScale(value) => self.state.set_scale(value),
            Command::PromptScale => {
                let value = self
                    .prompt_integer("Enter new scale (positive integer): ")?
                    .unwrap_or(1);
                self.state.set_scale(value);
            }
            Command::InvalidScale => {
                self.set_notice("Invalid scale. Reset to 1.");
                self.state.set_scale(1);
            }
            Command::OffsetCamera(axis, delta) => self.state.offset_camera(axis, delta),
            Command::InvalidOffset => self.set_notice("Invalid offset. Position not set."),
            Command::NextVertex => self.state.select_next(&self.model),
            Command::Quit => self.running = false,
            Command::Unknown => self.set_notice("Unknown command."),
        }

        Ok(())
    }

    fn set_notice(&mut self, notice: &str) {
        tracing::warn!(notice, "invalid input");
        self.notice = Some(notice.to_string());
    }

    /// Read one line, without its line ending. `None` once input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn prompt(&mut self, text: &str) -> io::Result<String> {
        queue!(self.output, Print(text))?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    fn prompt_integer(&mut self, text: &str) -> io::Result<Option<i64>> {
        Ok(parse_integer(&self.prompt(text)?))
    }
}
