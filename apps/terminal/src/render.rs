//! # Rendering
//!
//! Snapshot in, text out. Nothing here touches state or does I/O.
//!
//! ## Screens
//! ```text
//! ┌──────────────────────────────┐      ┌──────────────────────────────────┐
//! │ == Registro de Usuario ==    │      │ [ Cerrar sesión ]  (logout)      │
//! │ Correo Electrónico: …        │      │ -- Lista de usuarios --  (staff) │
//! │   ✗ error                    │      │   #7 Ana <ana@umg.com> [admin]   │
//! │ Edad: …                      │      │ -- Lista de productos --         │
//! │ Código de Empleado: (staff)  │      │   #1 Silla          Q 44.00      │
//! │ [ Registrarse ]              │      │   ░░░░░░░ (while loading)        │
//! │ ! alert                      │      │ Carrito: 0 artículos · Q 0.00    │
//! └──────────────────────────────┘      └──────────────────────────────────┘
//! ```

use std::fmt;

use registro_catalog::{DisplaySettings, ListState};
use registro_core::{Employee, FormField, FormSnapshot, GateSnapshot, ListKind, Product};

use crate::state::{AppSnapshot, Cart};

/// One placeholder row per skeleton card.
pub const SKELETON_ROW: &str = "  ░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░";

/// Longest description shown under a product.
const DESCRIPTION_WIDTH: usize = 72;

/// Renders the whole screen for a snapshot.
pub fn render(snapshot: &AppSnapshot, display: &DisplaySettings) -> String {
    Screen { snapshot, display }.to_string()
}

struct Screen<'a> {
    snapshot: &'a AppSnapshot,
    display: &'a DisplaySettings,
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_screen(out, self.snapshot, self.display)
    }
}

fn write_screen(
    out: &mut fmt::Formatter<'_>,
    snapshot: &AppSnapshot,
    display: &DisplaySettings,
) -> fmt::Result {
    match &snapshot.gate {
        GateSnapshot::Registration(form) => write_form(out, form),
        GateSnapshot::Catalog { lists, .. } => {
            writeln!(out, "[ Cerrar sesión ]  (logout)")?;
            for kind in lists {
                writeln!(out)?;
                writeln!(out, "-- {} --", kind.title())?;
                match kind {
                    ListKind::Employees => {
                        write_list(out, &snapshot.employees, display, write_employee)?
                    }
                    ListKind::Products => {
                        write_list(out, &snapshot.products, display, write_product)?
                    }
                }
            }
            writeln!(out)?;
            writeln!(
                out,
                "Carrito: {} artículo(s) · {}",
                snapshot.cart.total_quantity(),
                snapshot.cart.total()
            )
        }
    }
}

// =============================================================================
// Registration Screen
// =============================================================================

fn write_form(out: &mut fmt::Formatter<'_>, form: &FormSnapshot) -> fmt::Result {
    writeln!(out, "== Registro de Usuario ==")?;

    for field in FormField::ALL {
        if field == FormField::EmployeeCode && !form.show_employee_code {
            continue;
        }
        writeln!(out, "{}: {}", field.label(), form.fields.get(field))?;
        let error = form.error_for(field);
        if !error.is_empty() {
            writeln!(out, "  ✗ {}", error)?;
        }
    }

    writeln!(out, "[ Registrarse ]  (submit)")?;
    if !form.submit_error.is_empty() {
        writeln!(out, "! {}", form.submit_error)?;
    }
    Ok(())
}

// =============================================================================
// Catalog Screen
// =============================================================================

fn write_list<T>(
    out: &mut fmt::Formatter<'_>,
    state: &ListState<T>,
    display: &DisplaySettings,
    write_item: fn(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    match state {
        ListState::Loading => {
            for _ in 0..display.skeleton_cards {
                writeln!(out, "{}", SKELETON_ROW)?;
            }
        }
        ListState::Failed(message) => writeln!(out, "  ! {}", message)?,
        ListState::Loaded(items) if items.is_empty() => writeln!(out, "  (vacío)")?,
        ListState::Loaded(items) => {
            for item in items {
                write_item(out, item)?;
            }
        }
    }
    Ok(())
}

fn write_product(out: &mut fmt::Formatter<'_>, product: &Product) -> fmt::Result {
    writeln!(out, "  #{:<4} {:<40} {:>12}", product.id, product.title, product.price.to_string())?;
    writeln!(
        out,
        "        [{}] {}",
        product.category.name,
        product.placeholder_image_url()
    )?;
    if !product.description.is_empty() {
        writeln!(out, "        {}", clamp(&product.description, DESCRIPTION_WIDTH))?;
    }
    Ok(())
}

fn write_employee(out: &mut fmt::Formatter<'_>, employee: &Employee) -> fmt::Result {
    writeln!(
        out,
        "  #{:<4} {} <{}> [{}]",
        employee.id, employee.name, employee.email, employee.role
    )?;
    if !employee.avatar.is_empty() {
        writeln!(out, "        {}", employee.avatar)?;
    }
    Ok(())
}

/// Cuts `text` to `max` characters, marking the cut.
fn clamp(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut clamped: String = text.chars().take(max.saturating_sub(1)).collect();
    clamped.push('…');
    clamped
}

// =============================================================================
// Cart & Help
// =============================================================================

/// Cart listing for the `cart` command.
pub fn render_cart(cart: &Cart) -> String {
    if cart.is_empty() {
        return "El carrito está vacío.".to_string();
    }

    CartListing(cart).to_string()
}

struct CartListing<'a>(&'a Cart);

impl fmt::Display for CartListing<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cart(out, self.0)
    }
}

fn write_cart(out: &mut fmt::Formatter<'_>, cart: &Cart) -> fmt::Result {
    writeln!(
        out,
        "Carrito ({} producto(s), {} unidad(es))",
        cart.item_count(),
        cart.total_quantity()
    )?;
    for item in &cart.items {
        writeln!(
            out,
            "  #{:<4} {:<32} x{:<3} {:>12}",
            item.product_id,
            item.title,
            item.quantity,
            item.line_total().to_string()
        )?;
    }
    write!(out, "Total: {}", cart.total())
}

/// Commands valid on the current screen.
pub fn help_text(authenticated: bool) -> String {
    if authenticated {
        [
            "Comandos:",
            "  add <id> [cantidad]   Agregar al carrito",
            "  remove <id>           Quitar del carrito",
            "  clear                 Vaciar el carrito",
            "  cart                  Ver el carrito",
            "  logout                Cerrar sesión",
            "  help | quit",
        ]
        .join("\n")
    } else {
        [
            "Comandos:",
            "  email <valor>         Correo Electrónico",
            "  age <valor>           Edad",
            "  code <valor>          Código de Empleado",
            "  submit                Registrarse",
            "  help | quit",
        ]
        .join("\n")
    }
}
