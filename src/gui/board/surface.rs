use super::model::Path;
use palette::Srgb;
use std::convert::Infallible;
use strum::Display as StrumDisplay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    /// Offset along the path at which a run of `text_width` starts.
    pub fn shift(&self, path_length: f64, text_width: f64) -> f64 {
        match self {
            Self::Left => 0.0,
            Self::Center => (path_length - text_width) / 2.0,
            Self::Right => path_length - text_width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub color: Srgb<u8>,
    pub align: TextAlign,
}

/// The two drawing primitives the board needs from its host.
pub trait Surface {
    type Error;

    fn fill_path(&mut self, path: &Path, color: Srgb<u8>) -> Result<(), Self::Error>;

    /// Draws `text` with its baseline following `path`, starting `h_offset` along it and
    /// displaced by `v_offset` along the glyph's vertical axis.
    fn draw_text_on_path(
        &mut self,
        text: &str,
        path: &Path,
        h_offset: f64,
        v_offset: f64,
        style: &TextStyle,
    ) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillPath {
        path: Path,
        color: Srgb<u8>,
    },
    TextOnPath {
        text: String,
        path: Path,
        h_offset: f64,
        v_offset: f64,
        style: TextStyle,
    },
}

/// Keeps every draw call instead of rasterizing it.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn fills(&self) -> impl Iterator<Item = (&Path, Srgb<u8>)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillPath { path, color } => Some((path, *color)),
            DrawCommand::TextOnPath { .. } => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, &Path, &TextStyle)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::TextOnPath {
                text, path, style, ..
            } => Some((text.as_str(), path, style)),
            DrawCommand::FillPath { .. } => None,
        })
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn fill_path(&mut self, path: &Path, color: Srgb<u8>) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            color,
        });
        Ok(())
    }

    fn draw_text_on_path(
        &mut self,
        text: &str,
        path: &Path,
        h_offset: f64,
        v_offset: f64,
        style: &TextStyle,
    ) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::TextOnPath {
            text: text.to_owned(),
            path: path.clone(),
            h_offset,
            v_offset,
            style: *style,
        });
        Ok(())
    }
}
