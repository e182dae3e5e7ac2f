use clap::{Parser, Subcommand};

use ordtree::{Balance, Tree, TreeError};

use crate::contact::{by_name, by_phone, Contact};

mod contact;

#[derive(Parser, Debug)]
#[command(about = "Exercise the ordtree Binary Search Tree")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Insert 1..=N in ascending order into a plain and an AVL tree and compare their shapes.
    Report {
        #[arg(
            long,
            short,
            num_args = 1..,
            default_values_t = [100, 1000, 10000],
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        sizes: Vec<u32>,
    },
    /// Walk through a small contact book ordered by name.
    Contacts,
}

fn main() -> Result<(), TreeError> {
    let cli = Cli::parse();
    match cli.command {
        Command::Report { sizes } => report(&sizes),
        Command::Contacts => {
            contacts();
            Ok(())
        }
    }
}

fn report(sizes: &[u32]) -> Result<(), TreeError> {
    for &size in sizes {
        for balance in [Balance::Avl, Balance::Unbalanced] {
            let mut tree = Tree::with_balance(|a: &u32, b: &u32| a.cmp(b), balance);
            tree.extend(1..=size);
            println!(
                "{:?} tree built. Nodes: {} Height: {}",
                balance,
                tree.count(),
                tree.height()?
            );
        }
    }
    Ok(())
}

fn contacts() {
    let mut book = Tree::new(by_name);

    println!("=== ADDING CONTACTS ===");
    book.insert(Contact::new("Caio Cesar", "9999-1111", "caio@email.com"));
    book.insert(Contact::new("Heitor", "9888-2222", "heitor@email.com"));
    book.insert(Contact::new("Bruno", "9777-3333", "bruno@email.com"));
    book.insert(Contact::new("Mariano", "9666-4444", "mariano@email.com"));
    println!("{} contacts added.\n", book.count());

    println!("=== CONTACTS (IN ORDER) ===");
    print_all(&book);

    println!("=== SEARCH BY NAME ===");
    print_found(book.search(&Contact::named("bruno")));

    println!("=== SEARCH BY PHONE ===");
    let key = Contact::new("", "9666-4444", "");
    print_found(book.search_linear(|c| by_phone(&key, c).is_eq()));

    println!("=== REMOVING 'Carlos' ===");
    match book.remove(&Contact::named("Carlos")) {
        Some(removed) => println!("Removed: {}\n", removed),
        None => println!("No contact to remove.\n"),
    }

    println!("=== REMOVING 'Heitor' ===");
    match book.remove(&Contact::named("Heitor")) {
        Some(removed) => println!("Removed: {}\n", removed),
        None => println!("No contact to remove.\n"),
    }

    println!("=== CONTACTS (UPDATED) ===");
    print_all(&book);

    println!("=== LEVEL ORDER ===");
    println!("{}", book.level_order_string());
}

fn print_all<C>(book: &Tree<Contact, C>) {
    for contact in book {
        println!("{}", contact);
    }
    println!();
}

fn print_found(contact: Option<&Contact>) {
    match contact {
        Some(contact) => println!("Found: {}\n", contact),
        None => println!("Contact not found.\n"),
    }
}
