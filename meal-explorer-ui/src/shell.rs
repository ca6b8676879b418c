//! 命令行 shell
//!
//! 把一行文本解析成宿主事件，例如：
//!
//! ```text
//! nav categories
//! click category Seafood
//! click meal 52959
//! name  chicken
//! letter b
//! contact email cook@example.com
//! submit
//! ```

use thiserror::Error;

use crate::event::{InputField, Target, UiEvent};
use crate::model::state::ContactField;
use crate::model::NavItemId;
use crate::view::Document;

pub const HELP: &str = "\
commands:
  nav <search|categories|area|ingredients|contact>
  toggle                         open / close the side navigation
  name [text]                    type into the name search box
  letter [text]                  type into the first-letter search box
  click <meal|category|area|ingredient> <key>
  close                          close the meal detail
  contact <name|email|message> [text]
  submit                         submit the contact form
  show                           summarize the current page
  help
  quit";

/// 解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Event(UiEvent),
    Show,
    Help,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("unknown {what} '{value}'")]
    UnknownValue { what: &'static str, value: String },
}

/// 解析一行输入；空行返回 `Ok(None)`
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, ShellError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let (command, rest) = split_word(trimmed);

    let parsed = match command {
        "nav" => {
            let key = require(rest.trim(), "nav", "a panel name")?;
            let id = NavItemId::from_key(key).ok_or_else(|| ShellError::UnknownValue {
                what: "panel",
                value: key.to_string(),
            })?;
            ShellCommand::Event(UiEvent::Click(Target::NavLink(id)))
        }
        "toggle" => ShellCommand::Event(UiEvent::Click(Target::NavToggle)),
        "close" => ShellCommand::Event(UiEvent::Click(Target::CloseDetail)),
        "name" => input(InputField::SearchByName, rest),
        "letter" => input(InputField::SearchByFirstLetter, rest),
        "click" => {
            let (kind, key) = split_word(rest.trim_start());
            let kind = require(kind, "click", "a tile kind")?;
            let key = require(key.trim(), "click", "a key")?.to_string();
            let target = match kind {
                "meal" => Target::MealTile(key),
                "category" => Target::CategoryTile(key),
                "area" => Target::AreaTile(key),
                "ingredient" => Target::IngredientTile(key),
                other => {
                    return Err(ShellError::UnknownValue {
                        what: "tile kind",
                        value: other.to_string(),
                    })
                }
            };
            ShellCommand::Event(UiEvent::Click(target))
        }
        "contact" => {
            let (field, value) = split_word(rest.trim_start());
            let field = match require(field, "contact", "a field name")? {
                "name" => ContactField::Name,
                "email" => ContactField::Email,
                "message" => ContactField::Message,
                other => {
                    return Err(ShellError::UnknownValue {
                        what: "contact field",
                        value: other.to_string(),
                    })
                }
            };
            input(InputField::Contact(field), value)
        }
        "submit" => ShellCommand::Event(UiEvent::SubmitContact),
        "show" => ShellCommand::Show,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Event(UiEvent::Quit),
        other => return Err(ShellError::UnknownCommand(other.to_string())),
    };
    Ok(Some(parsed))
}

/// 文档摘要：可见区域、导航、加载状态
pub fn summarize(document: &Document) -> String {
    let visible: Vec<&str> = document
        .visible_sections()
        .map(|s| s.panel.title())
        .collect();
    format!(
        "visible: {} | nav: {} | loading: {}",
        visible.join(" + "),
        if document.nav_open { "open" } else { "closed" },
        if document.loading_visible { "shown" } else { "hidden" },
    )
}

/// 第一个单词与剩余部分（剩余部分去掉一个分隔空格，其余保留）
fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (s, ""),
    }
}

fn require<'a>(
    value: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, ShellError> {
    if value.is_empty() {
        Err(ShellError::MissingArgument { command, argument })
    } else {
        Ok(value)
    }
}

fn input(field: InputField, value: &str) -> ShellCommand {
    ShellCommand::Event(UiEvent::Input {
        field,
        value: value.to_string(),
    })
}
