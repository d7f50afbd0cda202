use anyhow::{anyhow, Context, Result};
use orderedlist::OrderedList;
use regex::Regex;
use std::{env, fs::File, io::Read, process};

mod orderedlist;

/*
 * One list operation parsed from a script line.
 */
#[derive(Debug, PartialEq)]
enum Command {
    Append(i64),
    Insert(i64, usize),
    Remove(usize),
}

/*
 * Parse a script into commands.
 * Input should be a list of lines, each formatted as one of :
 * append <value>
 * insert <value> <position>
 * remove <position>
 *
 * Blank lines and lines starting with '#' are skipped.
 */
fn parse_script(input: &str) -> Result<Vec<Command>> {
    let re = Regex::new(r"^\s*(append|insert|remove)\s+(-?\d+)(?:\s+(\d+))?\s*$")?;
    let mut commands = vec![];
    for l in input.lines() {
        let trimmed = l.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let captures = re
            .captures(l)
            .ok_or(anyhow!("Failed to parse line {}", l))?;
        let command = match captures.get(1).unwrap().as_str() {
            "append" => Command::Append(captures.get(2).unwrap().as_str().parse()?),
            "insert" => {
                let value = captures.get(2).unwrap().as_str().parse()?;
                let position = captures
                    .get(3)
                    .ok_or(anyhow!("Missing position in line {}", l))?
                    .as_str()
                    .parse()?;
                Command::Insert(value, position)
            }
            _ => Command::Remove(captures.get(2).unwrap().as_str().parse()?),
        };
        commands.push(command);
    }
    Ok(commands)
}

/*
 * Apply each command to the list and report its outcome.
 * Out-of-range positions are reported, never fatal.
 */
fn run(list: &mut OrderedList<i64>, commands: &[Command]) {
    for command in commands {
        match command {
            Command::Append(value) => {
                list.append(*value);
                println!("append {} -> ok", value);
            }
            Command::Insert(value, position) => {
                if list.insert_at(*value, *position) {
                    println!("insert {} at {} -> ok", value, position);
                } else {
                    println!("insert {} at {} -> out of range", value, position);
                }
            }
            Command::Remove(position) => match list.remove_at(*position) {
                Some(value) => println!("remove {} -> {}", position, value),
                None => println!("remove {} -> out of range", position),
            },
        }
    }
}

fn main() -> Result<()> {
    println!("Simple ordered list poc in rust :D");
    if env::args().len() != 2 {
        println!("Usage : {} [script file]", env::args().next().unwrap());
        process::exit(1);
    }
    let mut args = env::args().skip(1);

    let path = args.next().unwrap();
    let mut f = File::open(path).context("Failed to open file")?;
    let mut input = String::new();
    f.read_to_string(&mut input)
        .context("Failed to read file")?;

    let commands = parse_script(&input).context("Failed to parse script")?;

    let mut list = OrderedList::new();
    run(&mut list, &commands);

    println!("Final count : {}", list.count());
    list.print();

    Ok(())
}
