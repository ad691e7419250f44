//! # Commands Module
//!
//! One input line, one command.
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Terminal Commands                               │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌────────────────────────┐  │
//! │  │   Form           │ │   Cart           │ │   Session              │  │
//! │  │   (form.rs)      │ │   (cart.rs)      │ │   (session.rs)         │  │
//! │  │                  │ │                  │ │                        │  │
//! │  │ • email <v>      │ │ • add <id> [qty] │ │ • logout               │  │
//! │  │ • age <v>        │ │ • remove <id>    │ │ • help                 │  │
//! │  │ • code <v>       │ │ • clear          │ │ • quit                 │  │
//! │  │ • submit         │ │ • cart           │ │                        │  │
//! │  └──────────────────┘ └──────────────────┘ └────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field values are everything after the first space, untrimmed, so the
//! validators see exactly what was typed.

pub mod cart;
pub mod form;
pub mod session;

use std::str::FromStr;

use registro_core::FormField;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Edit(FormField, String),
    Submit,
    Add { product_id: i64, quantity: i64 },
    Remove { product_id: i64 },
    Clear,
    ShowCart,
    Logout,
    Help,
    Quit,
}

/// What the input loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Keep reading. Optional text to print (the screen redraws separately).
    Continue(Option<String>),
    Quit,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (verb, rest) = match line.split_once(' ') {
            Some((verb, rest)) => (verb, rest),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "submit" | "registrarse" => Ok(Command::Submit),
            "add" | "agregar" => parse_add(rest),
            "remove" | "quitar" => Ok(Command::Remove {
                product_id: parse_id(rest)?,
            }),
            "clear" | "vaciar" => Ok(Command::Clear),
            "cart" | "carrito" => Ok(Command::ShowCart),
            "logout" => Ok(Command::Logout),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => {
                let field = FormField::from_str(verb).map_err(|_| {
                    AppError::unknown_command(format!(
                        "Unknown command '{}'. Type 'help' for the list.",
                        verb
                    ))
                })?;
                Ok(Command::Edit(field, rest.to_string()))
            }
        }
    }
}

fn parse_id(text: &str) -> AppResult<i64> {
    let text = text.trim();
    text.parse::<i64>()
        .map_err(|_| AppError::validation(format!("Expected a product id, got '{}'", text)))
}

fn parse_add(rest: &str) -> AppResult<Command> {
    let mut parts = rest.split_whitespace();
    let product_id = parse_id(parts.next().unwrap_or_default())?;
    let quantity = match parts.next() {
        Some(qty) => qty
            .parse::<i64>()
            .map_err(|_| AppError::validation(format!("Expected a quantity, got '{}'", qty)))?,
        None => 1,
    };

    if parts.next().is_some() {
        return Err(AppError::validation("Usage: add <product-id> [qty]"));
    }

    Ok(Command::Add {
        product_id,
        quantity,
    })
}

/// Runs a command against the controller.
pub fn execute(state: &AppState, command: Command) -> AppResult<Reply> {
    match command {
        Command::Edit(field, value) => form::edit_field(state, field, value),
        Command::Submit => form::submit(state),
        Command::Add {
            product_id,
            quantity,
        } => cart::add_to_cart(state, product_id, quantity),
        Command::Remove { product_id } => cart::remove_from_cart(state, product_id),
        Command::Clear => cart::clear_cart(state),
        Command::ShowCart => cart::show_cart(state),
        Command::Logout => session::logout(state),
        Command::Help => session::help(state),
        Command::Quit => Ok(Reply::Quit),
    }
}
