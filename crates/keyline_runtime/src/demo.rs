//! Demo command set.
//!
//! A small library of overloaded commands that shows off every parameter
//! kind: integer/string overloads, float arrays, switch routing, and a
//! switch competing with a string fallback.

use keyline_dispatch::{Dispatcher, ParamKind};
use keyline_foundation::Value;

/// Registers the demo commands on `dispatcher`.
pub fn register_demo_commands(dispatcher: &Dispatcher) {
    dispatcher.register_command("give", vec![ParamKind::integer("amount")], |args| {
        println!("You receive {} coin(s).", args[0]);
    });

    dispatcher.register_command(
        "give",
        vec![ParamKind::string("item"), ParamKind::integer("amount")],
        |args| {
            println!("You receive {} x {}.", args[1], args[0]);
        },
    );

    dispatcher.register_command("echo", vec![ParamKind::string("text")], |args| {
        println!("{}", args[0]);
    });

    dispatcher.register_command(
        "sum",
        vec![ParamKind::array("end", ParamKind::float("n"))],
        |args| {
            println!("{}", sum(&args[0]));
        },
    );

    dispatcher.register_command(
        "scoreboard",
        vec![
            ParamKind::switch("objectives"),
            ParamKind::switch("add"),
            ParamKind::string("name"),
        ],
        |args| {
            println!("Added objective {}.", args[2]);
        },
    );

    dispatcher.register_command(
        "scoreboard",
        vec![
            ParamKind::switch("players"),
            ParamKind::switch("add"),
            ParamKind::string("player"),
            ParamKind::integer("points"),
        ],
        |args| {
            println!("Gave {} point(s) to {}.", args[3], args[2]);
        },
    );

    dispatcher.register_command("tp", vec![ParamKind::switch("home")], |_| {
        println!("Teleported home.");
    });

    dispatcher.register_command("tp", vec![ParamKind::string("place")], |args| {
        println!("Teleported to {}.", args[0]);
    });
}

/// Sums a list of numbers.
fn sum(list: &Value) -> f64 {
    list.as_list()
        .map_or(0.0, |items| items.iter().filter_map(Value::as_number).sum())
}
