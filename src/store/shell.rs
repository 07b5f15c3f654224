//! interactive storefront session

use crate::store::api::client::ApiClient;
use crate::store::controller::{cart, catalog, checkout};
use crate::store::state::StoreState;
use crate::store::util::{price, text};
use log::error;
use std::io::Write as _;
use tokio::io::{stdin, AsyncBufReadExt, BufReader, Lines, Stdin};

/// Read commands until EOF or `quit`, rendering the affected panel
/// after every mutation.
pub(crate) async fn run(state: &mut StoreState, api: &ApiClient) -> Result<(), anyhow::Error> {
    println!("Welcome to the lesson storefront. Type 'help' to list commands.");
    print_lines(render_catalog(state));

    let mut lines = BufReader::new(stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break; // EOF
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "help" => print_help(),
            "list" => print_lines(render_catalog(state)),
            "search" => {
                state.search_term = rest.to_string();
                print_lines(render_catalog(state));
            }
            "sort" => match rest.parse() {
                Ok(key) => {
                    catalog::set_sort(state, key);
                    print_lines(render_catalog(state));
                }
                Err(e) => alert(&e),
            },
            "toggle" => match catalog::toggle_sort(state) {
                Ok(order) => {
                    println!("sorting {}", order);
                    print_lines(render_catalog(state));
                }
                Err(e) => alert(&e.to_string()),
            },
            "info" => match resolve_row(state, rest) {
                Ok(id) => {
                    state.selected_lesson = Some(id);
                    state.show_info_modal = true;
                    print_lines(render_lesson_detail(state));
                }
                Err(msg) => alert(&msg),
            },
            "close" => {
                state.show_info_modal = false;
                state.selected_lesson = None;
                checkout::close_checkout_form(state);
            }
            "add" => match resolve_row(state, rest) {
                Ok(id) => match cart::add_to_cart(state, &id) {
                    Ok(()) => print_lines(render_cart(state)),
                    Err(e) => alert(&e.to_string()),
                },
                Err(msg) => alert(&msg),
            },
            "remove" => match rest.parse::<usize>() {
                Ok(n) if n >= 1 => match cart::remove_from_cart(state, n - 1) {
                    Ok(item) => {
                        println!("removed {}", item.subject);
                        if state.show_cart {
                            print_lines(render_cart(state));
                        }
                    }
                    Err(e) => alert(&e.to_string()),
                },
                _ => alert(&format!("expected a cart entry number, got '{rest}'")),
            },
            "cart" => {
                cart::toggle_cart(state);
                if state.show_cart {
                    print_lines(render_cart(state));
                } else {
                    println!("cart hidden");
                }
            }
            "checkout" => run_checkout(state, api, &mut lines).await?,
            "reload" => reload(state, api).await,
            "quit" | "exit" => break,
            unknown => alert(&format!("unknown command '{unknown}', try 'help'")),
        }
    }
    Ok(())
}

/// The checkout form: cart summary, three fields, confirmation.
async fn run_checkout(
    state: &mut StoreState,
    api: &ApiClient,
    lines: &mut Lines<BufReader<Stdin>>,
) -> Result<(), anyhow::Error> {
    if let Err(e) = checkout::open_checkout_form(state) {
        alert(&e.to_string());
        return Ok(());
    }
    print_lines(render_cart(state));

    let Some(name) = read_field(lines, "name: ").await? else {
        checkout::close_checkout_form(state);
        return Ok(());
    };
    let Some(email) = read_field(lines, "email: ").await? else {
        checkout::close_checkout_form(state);
        return Ok(());
    };
    let Some(phone) = read_field(lines, "phone: ").await? else {
        checkout::close_checkout_form(state);
        return Ok(());
    };
    state.customer.name = name.trim().to_string();
    state.customer.email = email.trim().to_string();
    state.customer.phone = checkout::sanitize_phone(&phone);

    match checkout::confirm_checkout(state, api).await {
        Ok(receipt) => {
            println!(
                "Booking confirmed! Total: {}",
                price::format_amount(receipt.total)
            );
            println!("placed at {}", receipt.placed_at);
            reload(state, api).await;
        }
        // the form stays open, `checkout` again retries and `close` gives up
        Err(e) => alert(&e.to_string()),
    }
    Ok(())
}

async fn read_field(
    lines: &mut Lines<BufReader<Stdin>>,
    prompt: &str,
) -> Result<Option<String>, std::io::Error> {
    print!("{}", prompt);
    std::io::stdout().flush()?;
    lines.next_line().await
}

async fn reload(state: &mut StoreState, api: &ApiClient) {
    match api.fetch_lessons().await {
        Ok(lessons) => {
            state.set_lessons(lessons);
            println!("{} lessons loaded", state.lessons.len());
        }
        Err(e) => {
            error!("lesson fetch failed, {}", e);
            alert("could not load lessons from the backend");
        }
    }
}

/// Row numbers shown by `render_catalog` are 1-based into the visible
/// view; map one back to a lesson id.
fn resolve_row(state: &StoreState, rest: &str) -> Result<String, String> {
    let row: usize = rest
        .parse()
        .map_err(|_| format!("expected a catalog row number, got '{rest}'"))?;
    let visible = catalog::visible_lessons(state);
    row.checked_sub(1)
        .and_then(|idx| visible.get(idx))
        .map(|lesson| lesson.id.clone())
        .ok_or_else(|| format!("no row {row} in the current view"))
}

pub(crate) fn render_catalog(state: &StoreState) -> Vec<String> {
    let visible = catalog::visible_lessons(state);
    let term = &state.search_term;

    let mut header = format!("{} lesson(s)", visible.len());
    if !term.is_empty() {
        header.push_str(&format!(" matching \"{}\"", term));
    }
    if let Some(key) = state.sort_by {
        header.push_str(&format!(", sorted by {} {}", key, state.sort_order));
    }

    let mut out = Vec::with_capacity(visible.len() + 1);
    out.push(header);
    for (row, lesson) in visible.iter().enumerate() {
        out.push(format!(
            "{:>3}. {} | {} | {} | seats: {} | {}",
            row + 1,
            text::highlight(&lesson.subject, term),
            text::highlight(&lesson.location, term),
            text::highlight(&lesson.price, term),
            lesson.seats,
            text::highlight(lesson.features.as_deref().unwrap_or("-"), term),
        ));
    }
    out
}

fn render_cart(state: &StoreState) -> Vec<String> {
    if state.cart.is_empty() {
        return vec!["cart is empty".to_string()];
    }
    let mut out = Vec::with_capacity(state.cart.len() + 2);
    out.push("cart:".to_string());
    for (n, item) in state.cart.iter().enumerate() {
        out.push(format!("{:>3}. {} | {}", n + 1, item.subject, item.price));
    }
    out.push(format!(
        "Total: {}",
        price::format_amount(cart::total_price(state))
    ));
    out
}

fn render_lesson_detail(state: &StoreState) -> Vec<String> {
    let Some(lesson) = state
        .selected_lesson
        .as_deref()
        .and_then(|id| state.lessons.iter().find(|lesson| lesson.id == id))
    else {
        return vec![];
    };
    let mut out = vec![
        format!("subject:  {}", lesson.subject),
        format!("location: {}", lesson.location),
        format!("price:    {}", lesson.price),
        format!("seats:    {}", lesson.seats),
    ];
    if let Some(features) = &lesson.features {
        out.push(format!("features: {}", features));
    }
    if let Some(image) = &lesson.image {
        out.push(format!("image:    {}", image));
    }
    out.push("type 'close' to leave the detail view".to_string());
    out
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

fn alert(msg: &str) {
    println!("[!] {}", msg);
}

fn print_help() {
    println!("commands:");
    println!("  list             show the catalog");
    println!("  search [term]    filter the catalog, an empty term clears the filter");
    println!("  sort <key>       sort by subject, location, price or seats");
    println!("  toggle           flip between ascending and descending");
    println!("  info <row>       show details for a catalog row");
    println!("  close            leave the detail or checkout view");
    println!("  add <row>        put a catalog row into the cart");
    println!("  remove <n>       drop cart entry n, restoring its seat");
    println!("  cart             show or hide the cart");
    println!("  checkout         place the order for the cart");
    println!("  reload           refetch lessons from the backend");
    println!("  quit             leave the storefront");
}
