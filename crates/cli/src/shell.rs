//! Text menu loop.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use larder_infra::{InventoryRepository, InventoryStore, SaveOutcome};
use larder_inventory::{AddOutcome, ExpirationStatus, RemoveOutcome, check_expired};
use larder_recipes::{RecipeTable, suggest_recipes};

const MENU: &str = "\
Household Inventory
  1. Add item
  2. Remove item
  3. Check expired items
  4. Suggest recipes
  5. Quit
  6. List inventory
";

/// Parsed menu selection.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Choice {
    Add,
    Remove,
    CheckExpired,
    SuggestRecipes,
    Quit,
    List,
}

impl Choice {
    fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "1" => Some(Choice::Add),
            "2" => Some(Choice::Remove),
            "3" => Some(Choice::CheckExpired),
            "4" => Some(Choice::SuggestRecipes),
            "5" | "q" | "quit" => Some(Choice::Quit),
            "6" => Some(Choice::List),
            _ => None,
        }
    }
}

/// Interactive shell over an [`InventoryStore`].
///
/// `today` is asked for the current date each time expiration is checked.
pub struct Shell<'s, R, T> {
    store: &'s mut InventoryStore<R>,
    recipes: RecipeTable,
    today: T,
}

impl<'s, R, T> Shell<'s, R, T>
where
    R: InventoryRepository,
    T: Fn() -> NaiveDate,
{
    pub fn new(store: &'s mut InventoryStore<R>, recipes: RecipeTable, today: T) -> Self {
        Self {
            store,
            recipes,
            today,
        }
    }

    /// Run until the user quits or input ends.
    pub fn run<I: BufRead, O: Write>(mut self, mut input: I, mut out: O) -> io::Result<()> {
        loop {
            write!(out, "\n{MENU}Choose an option: ")?;
            out.flush()?;

            let Some(line) = read_line(&mut input)? else {
                writeln!(out)?;
                break;
            };

            match Choice::parse(&line) {
                Some(Choice::Add) => self.add(&mut input, &mut out)?,
                Some(Choice::Remove) => self.remove(&mut input, &mut out)?,
                Some(Choice::CheckExpired) => self.check_expired(&mut out)?,
                Some(Choice::SuggestRecipes) => self.suggest(&mut out)?,
                Some(Choice::List) => self.list(&mut out)?,
                Some(Choice::Quit) => break,
                None => writeln!(out, "Invalid option: {}", line.trim())?,
            }
        }
        writeln!(out, "Goodbye.")?;
        Ok(())
    }

    fn add<I: BufRead, O: Write>(&mut self, input: &mut I, out: &mut O) -> io::Result<()> {
        let Some(name) = prompt(input, out, "Item name: ")? else {
            return Ok(());
        };
        let Some(quantity) = prompt_quantity(input, out)? else {
            return Ok(());
        };
        let Some(date) = prompt(input, out, "Expiration date (YYYY-MM-DD): ")? else {
            return Ok(());
        };

        match self.store.add_item(&name, quantity, date.trim()) {
            Ok(AddOutcome::Created { quantity }) => {
                writeln!(out, "Added {quantity} x {name}.")?;
                self.warn_if_unsaved(out)?;
            }
            Ok(AddOutcome::Restocked {
                quantity,
                expiration_date,
            }) => {
                writeln!(
                    out,
                    "Updated {name}: now {quantity} (expiration date stays {expiration_date})."
                )?;
                self.warn_if_unsaved(out)?;
            }
            Err(err) => writeln!(out, "Error: {err}")?,
        }
        Ok(())
    }

    fn remove<I: BufRead, O: Write>(&mut self, input: &mut I, out: &mut O) -> io::Result<()> {
        let Some(name) = prompt(input, out, "Item name: ")? else {
            return Ok(());
        };
        let Some(quantity) = prompt_quantity(input, out)? else {
            return Ok(());
        };

        match self.store.remove_item(&name, quantity) {
            Ok(RemoveOutcome::Decremented { remaining }) => {
                writeln!(out, "Removed {quantity} x {name}; {remaining} left.")?;
                self.warn_if_unsaved(out)?;
            }
            Ok(RemoveOutcome::Removed) => {
                writeln!(out, "Removed {name} from the inventory.")?;
                self.warn_if_unsaved(out)?;
            }
            Err(err) => writeln!(out, "Error: {err}")?,
        }
        Ok(())
    }

    fn check_expired<O: Write>(&self, out: &mut O) -> io::Result<()> {
        let expired = check_expired(self.store.inventory(), (self.today)());
        if expired.is_empty() {
            return writeln!(out, "No expired items.");
        }
        writeln!(out, "Expired items:")?;
        for item in expired {
            writeln!(out, "  - {} (expired {})", item.name, item.expiration_date)?;
        }
        Ok(())
    }

    fn suggest<O: Write>(&self, out: &mut O) -> io::Result<()> {
        let recipes = suggest_recipes(self.store.inventory(), &self.recipes);
        if recipes.is_empty() {
            return writeln!(out, "No recipes can be made with the current inventory.");
        }
        writeln!(out, "You can make:")?;
        for name in recipes {
            writeln!(out, "  - {name}")?;
        }
        Ok(())
    }

    fn list<O: Write>(&self, out: &mut O) -> io::Result<()> {
        if self.store.is_empty() {
            return writeln!(out, "The inventory is empty.");
        }
        let today = (self.today)();
        for item in self.store.inventory() {
            let marker = match ExpirationStatus::classify(item.expiration_date(), today) {
                ExpirationStatus::Expired => " [expired]",
                ExpirationStatus::Fresh => "",
            };
            writeln!(
                out,
                "  {}: {} (expires {}){marker}",
                item.name(),
                item.quantity(),
                item.expiration_date()
            )?;
        }
        Ok(())
    }

    fn warn_if_unsaved<O: Write>(&self, out: &mut O) -> io::Result<()> {
        if self.store.last_save() == Some(SaveOutcome::Failed) {
            writeln!(out, "Warning: the change could not be saved to disk.")?;
        }
        Ok(())
    }
}

/// Read one line without its terminator. `None` at end of input.
fn read_line<I: BufRead>(input: &mut I) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn prompt<I: BufRead, O: Write>(
    input: &mut I,
    out: &mut O,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;
    read_line(input)
}

/// Ask for a quantity. Text that is not a whole number is reported here and
/// never reaches the store.
fn prompt_quantity<I: BufRead, O: Write>(input: &mut I, out: &mut O) -> io::Result<Option<i64>> {
    let Some(text) = prompt(input, out, "Quantity: ")? else {
        return Ok(None);
    };
    match text.trim().parse::<i64>() {
        Ok(n) => Ok(Some(n)),
        Err(_) => {
            writeln!(out, "Invalid quantity: {:?} is not a whole number.", text.trim())?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_infra::InMemoryRepository;
    use std::io::Cursor;

    fn june_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn run_session(repo: &InMemoryRepository, script: &str) -> String {
        let mut store = InventoryStore::with_repository(repo);
        let mut out = Vec::new();
        Shell::new(&mut store, RecipeTable::built_in(), june_first)
            .run(Cursor::new(script.as_bytes()), &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn choice_parsing() {
        assert_eq!(Choice::parse(" 1 "), Some(Choice::Add));
        assert_eq!(Choice::parse("5"), Some(Choice::Quit));
        assert_eq!(Choice::parse("q"), Some(Choice::Quit));
        assert_eq!(Choice::parse("7"), None);
    }

    #[test]
    fn add_then_check_expired() {
        let repo = InMemoryRepository::new();
        let out = run_session(&repo, "1\nMilk\n1\n2025-05-01\n3\n5\n");

        assert!(out.contains("Added 1 x Milk."));
        assert!(out.contains("Expired items:\n  - Milk (expired 2025-05-01)"));
        assert!(out.ends_with("Goodbye.\n"));
        assert_eq!(repo.save_attempts(), 1);
    }

    #[test]
    fn bad_quantity_text_never_reaches_store() {
        let repo = InMemoryRepository::new();
        let out = run_session(&repo, "1\nMilk\nlots\n6\n5\n");

        assert!(out.contains("Invalid quantity: \"lots\" is not a whole number."));
        assert!(out.contains("The inventory is empty."));
        assert_eq!(repo.save_attempts(), 0);
    }

    #[test]
    fn errors_are_reported_in_plain_words() {
        let repo = InMemoryRepository::new();
        let out = run_session(&repo, "2\nBread\n1\n1\nMilk\n1\nJune 1 2025\n5\n");

        assert!(out.contains("Error: item not found: Bread"));
        assert!(out.contains("Error: invalid date format"));
    }

    #[test]
    fn suggests_recipes_from_stock() {
        let repo = InMemoryRepository::with_snapshot(
            r#"{
                "Pasta": {"quantity": 1, "expiration_date": "2026-01-01"},
                "Tomato Sauce": {"quantity": 1, "expiration_date": "2026-01-01"},
                "Cheese": {"quantity": 1, "expiration_date": "2026-01-01"},
                "Bread": {"quantity": 1, "expiration_date": "2026-01-01"}
            }"#,
        );
        let out = run_session(&repo, "4\n3\n5\n");

        assert!(out.contains("You can make:\n  - Pasta\n"));
        assert!(!out.contains("Sandwich"));
        assert!(out.contains("No expired items."));
    }

    #[test]
    fn end_of_input_quits() {
        let repo = InMemoryRepository::new();
        let out = run_session(&repo, "");
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn failed_save_is_surfaced() {
        let repo = InMemoryRepository::failing_writes();
        let out = run_session(&repo, "1\nEggs\n6\n2025-07-01\n6\n5\n");

        assert!(out.contains("Added 6 x Eggs."));
        assert!(out.contains("Warning: the change could not be saved to disk."));
        assert!(out.contains("  Eggs: 6 (expires 2025-07-01)\n"));
    }
}
