// src/cli.rs
use std::env;
use std::io::{self, BufRead, Write};

use color_eyre::eyre::{self, eyre};

use crate::aggregate;
use crate::growth;
use crate::params::{ITEM_SLOTS, MAX_LEVEL, MIN_LEVEL};
use crate::report;
use crate::resolve::{self, Match};
use crate::specs;
use crate::stats::StatTable;
use crate::wiki::{ArticlePage, CachedSource, PageSource, WikiSource};

/// What one invocation should do.
#[derive(Debug)]
struct Args {
    champion: Option<String>,
    level: Option<u8>,
    items: Vec<String>,
    curve: bool,
    list: Option<ArticlePage>,
}

impl Args {
    fn new() -> Self {
        Self {
            champion: None,
            level: None,
            items: Vec::new(),
            curve: false,
            list: None,
        }
    }
}

pub fn run() -> eyre::Result<()> {
    let args = parse_args(env::args().skip(1)).map_err(|e| eyre!(e))?;
    let source = CachedSource::new(WikiSource);

    if let Some(page) = args.list {
        return list_names(&source, page);
    }
    if let Some(champion) = args.champion.as_deref() {
        return one_shot(&source, champion, &args);
    }
    if args.curve || args.level.is_some() || !args.items.is_empty() {
        return Err(eyre!("-l, -i and --curve need -c/--champion"));
    }
    interactive(&source)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut out = Args::new();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-c" | "--champion" => {
                let v = args.next().ok_or("Missing value for --champion")?;
                out.champion = Some(v);
            }
            "-l" | "--level" => {
                let v = args.next().ok_or("Missing value for --level")?;
                out.level = Some(v.parse().map_err(|_| format!("Invalid level: {v}"))?);
            }
            "-i" | "--item" => {
                let v = args.next().ok_or("Missing value for --item")?;
                if out.items.len() == ITEM_SLOTS {
                    return Err(format!("At most {ITEM_SLOTS} items"));
                }
                out.items.push(v);
            }
            "--curve" => out.curve = true,
            "--list" => {
                let v = args.next().ok_or("Missing value for --list")?;
                out.list = Some(match v.to_ascii_lowercase().as_str() {
                    "champions" => ArticlePage::Champions,
                    "items" => ArticlePage::Items,
                    other => return Err(format!("Unknown table: {other}")),
                });
            }
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {a}")),
        }
    }
    Ok(out)
}

/* ---------- name resolution (prompt side) ---------- */

/// What to do with one offered candidate.
#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    Confirm,
    Next,
    ReEnter(String),
}

/// Interaction strategy while resolving a typed name. Production asks
/// over stdin; tests script the replies.
pub trait NamePrompt {
    /// "Did you mean `candidate`?"
    fn offer(&mut self, candidate: &str, label: &str) -> Reply;

    /// Nothing matched; ask for a fresh name. Empty cancels.
    fn retry(&mut self, label: &str) -> String;
}

/// Resolve `input` against `table`, driving `prompt` until a key is
/// confirmed or the user cancels. `None` means cancelled.
pub fn resolve_name(table: &StatTable, prompt: &mut dyn NamePrompt, input: &str) -> Option<String> {
    let mut current = input.to_string();
    loop {
        if current.trim().is_empty() {
            return None;
        }
        match resolve::match_name(table, &current) {
            Match::Exact(key) => return Some(key),
            Match::Candidates(keys) => {
                let mut reentered = None;
                for key in &keys {
                    match prompt.offer(key, table.label()) {
                        Reply::Confirm => return Some(key.clone()),
                        Reply::Next => continue,
                        Reply::ReEnter(name) => {
                            reentered = Some(name);
                            break;
                        }
                    }
                }
                // Declining every candidate cancels.
                current = reentered?;
            }
            Match::None => {
                current = prompt.retry(table.label());
            }
        }
    }
}

/// Stdin-backed prompt, the interactive default.
pub struct StdinPrompt;

impl NamePrompt for StdinPrompt {
    fn offer(&mut self, candidate: &str, label: &str) -> Reply {
        let answer = ask(&format!(
            "Did you mean {candidate}?\n1) Confirm\n2) Find next\n3) Re-enter {label}\n> "
        ));
        match answer.as_str() {
            "1" => Reply::Confirm,
            "2" => Reply::Next,
            _ => Reply::ReEnter(ask(&format!(
                "Enter {label} name or press Enter to cancel: "
            ))),
        }
    }

    fn retry(&mut self, label: &str) -> String {
        ask(&format!(
            "{} not found.\nRe-enter {label} or press Enter to cancel: ",
            capitalize(label)
        ))
    }
}

/* ---------- interactive session ---------- */

fn interactive(source: &dyn PageSource) -> eyre::Result<()> {
    let champions = specs::load(source, ArticlePage::Champions)?;
    let mut prompt = StdinPrompt;

    let typed = ask("Enter a champion: ");
    let Some(champion) = resolve_name(&champions, &mut prompt, &typed) else {
        return Ok(());
    };
    let Some(level) = ask_level() else {
        return Ok(());
    };

    let mut totals = growth::stats_at_level(&champions, &champion, level)?;

    // The item table is only worth fetching once an item is typed.
    let first = ask("Enter an item or press Enter when finished: ");
    if !first.is_empty() {
        let item_table = specs::load(source, ArticlePage::Items)?;
        let mut items = Vec::new();
        collect_items(&item_table, &mut prompt, first, &mut items);
        let vectors = aggregate::item_vectors(&item_table, &items)?;
        totals = aggregate::combine(&totals, &vectors);
    }

    let eh = aggregate::effective_health(&totals)?;
    print!("{}", report::render(&champion, level, &totals, &eh)?);
    Ok(())
}

/// Resolve item names until the inventory is full, an entry is left
/// blank, or a resolution is cancelled.
fn collect_items(
    table: &StatTable,
    prompt: &mut dyn NamePrompt,
    first: String,
    items: &mut Vec<String>,
) {
    let mut input = first;
    loop {
        match resolve_name(table, prompt, &input) {
            Some(name) => items.push(name),
            None => break,
        }
        if items.len() == ITEM_SLOTS {
            break;
        }
        input = ask("Enter an item or press Enter when finished: ");
        if input.is_empty() {
            break;
        }
    }
}

/// Keep asking until a valid level comes back. Blank input cancels.
fn ask_level() -> Option<u8> {
    loop {
        let line = ask(&format!("Enter a level between {MIN_LEVEL}-{MAX_LEVEL}: "));
        if line.is_empty() {
            return None;
        }
        match line.parse::<u8>() {
            Ok(level) if (MIN_LEVEL..=MAX_LEVEL).contains(&level) => return Some(level),
            _ => println!("Invalid level."),
        }
    }
}

/// Print a prompt and read one trimmed line from stdin.
fn ask(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = s!();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return s!();
    }
    line.trim().to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => s!(),
    }
}

/* ---------- non-interactive modes ---------- */

fn one_shot(source: &dyn PageSource, champion: &str, args: &Args) -> eyre::Result<()> {
    let champions = specs::load(source, ArticlePage::Champions)?;
    let name = exact_key(&champions, champion)?;

    if args.curve {
        let curve = growth::curve(&champions, &name)?;
        print!("{}", report::render_curve(&name, &curve));
        return Ok(());
    }

    let level = args.level.unwrap_or(MAX_LEVEL);
    let mut totals = growth::stats_at_level(&champions, &name, level)?;

    if !args.items.is_empty() {
        let item_table = specs::load(source, ArticlePage::Items)?;
        let mut resolved = Vec::with_capacity(args.items.len());
        for item in &args.items {
            resolved.push(exact_key(&item_table, item)?);
        }
        let vectors = aggregate::item_vectors(&item_table, &resolved)?;
        totals = aggregate::combine(&totals, &vectors);
    }

    let eh = aggregate::effective_health(&totals)?;
    print!("{}", report::render(&name, level, &totals, &eh)?);
    Ok(())
}

fn list_names(source: &dyn PageSource, page: ArticlePage) -> eyre::Result<()> {
    let table = specs::load(source, page)?;
    for name in table.keys() {
        println!("{name}");
    }
    Ok(())
}

/// Exact lookup for the non-interactive path; nothing prompts, so
/// fuzzy candidates are not offered.
fn exact_key(table: &StatTable, input: &str) -> crate::error::Result<String> {
    match resolve::match_name(table, input) {
        Match::Exact(key) => Ok(key),
        _ => Err(crate::error::StatsError::UnknownEntity {
            label: table.label(),
            name: input.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatVector;

    fn table(keys: &[&str]) -> StatTable {
        let mut t = StatTable::new("champion");
        for k in keys {
            t.insert(s!(*k), StatVector::new());
        }
        t
    }

    /* -- argument parsing -- */

    fn parse(args: &[&str]) -> Result<Args, String> {
        parse_args(args.iter().map(|a| s!(*a)))
    }

    #[test]
    fn no_args_means_interactive() {
        let args = parse(&[]).unwrap();
        assert!(args.champion.is_none());
        assert!(args.level.is_none());
        assert!(args.items.is_empty());
        assert!(!args.curve);
        assert!(args.list.is_none());
    }

    #[test]
    fn one_shot_flags_parse() {
        let args = parse(&[
            "-c", "Aatrox", "-l", "12", "-i", "Zeal", "--item", "Ruby Crystal",
        ])
        .unwrap();
        assert_eq!(args.champion.as_deref(), Some("Aatrox"));
        assert_eq!(args.level, Some(12));
        assert_eq!(args.items, ["Zeal", "Ruby Crystal"]);
    }

    #[test]
    fn a_seventh_item_is_rejected() {
        let mut argv = vec![s!("-c"), s!("Aatrox")];
        for _ in 0..7 {
            argv.push(s!("-i"));
            argv.push(s!("Ruby Crystal"));
        }
        let err = parse_args(argv.into_iter()).unwrap_err();
        assert!(err.contains("6"));
    }

    #[test]
    fn list_mode_parses_table_names() {
        assert_eq!(parse(&["--list", "items"]).unwrap().list, Some(ArticlePage::Items));
        assert_eq!(
            parse(&["--list", "Champions"]).unwrap().list,
            Some(ArticlePage::Champions)
        );
        assert!(parse(&["--list", "runes"]).is_err());
    }

    #[test]
    fn bad_flags_are_reported() {
        assert!(parse(&["--frobnicate"]).is_err());
        assert!(parse(&["-c"]).is_err());
        assert!(parse(&["-l", "soon"]).is_err());
    }

    /* -- prompt-driven resolution -- */

    struct Scripted {
        offers: Vec<Reply>,
        retries: Vec<&'static str>,
        offered: Vec<String>,
    }

    impl Scripted {
        fn new(offers: Vec<Reply>, retries: Vec<&'static str>) -> Self {
            Self { offers, retries, offered: Vec::new() }
        }
    }

    impl NamePrompt for Scripted {
        fn offer(&mut self, candidate: &str, _label: &str) -> Reply {
            self.offered.push(candidate.to_string());
            self.offers.remove(0)
        }

        fn retry(&mut self, _label: &str) -> String {
            if self.retries.is_empty() {
                s!()
            } else {
                s!(self.retries.remove(0))
            }
        }
    }

    #[test]
    fn exact_input_skips_the_prompt() {
        let t = table(&["Aatrox", "Ahri"]);
        let mut prompt = Scripted::new(vec![], vec![]);
        assert_eq!(
            resolve_name(&t, &mut prompt, "aatrox").as_deref(),
            Some("Aatrox")
        );
        assert!(prompt.offered.is_empty());
    }

    #[test]
    fn next_moves_to_the_following_candidate() {
        let t = table(&["Akali", "Kalista"]);
        let mut prompt = Scripted::new(vec![Reply::Next, Reply::Confirm], vec![]);
        assert_eq!(
            resolve_name(&t, &mut prompt, "kalis").as_deref(),
            Some("Kalista")
        );
        assert_eq!(prompt.offered, ["Akali", "Kalista"]);
    }

    #[test]
    fn declining_every_candidate_cancels() {
        let t = table(&["Akali", "Kalista"]);
        let mut prompt = Scripted::new(vec![Reply::Next, Reply::Next], vec![]);
        assert_eq!(resolve_name(&t, &mut prompt, "kalis"), None);
    }

    #[test]
    fn reentering_restarts_with_the_new_name() {
        let t = table(&["Akali", "Kalista"]);
        let mut prompt = Scripted::new(vec![Reply::ReEnter(s!("Akali"))], vec![]);
        assert_eq!(
            resolve_name(&t, &mut prompt, "kalis").as_deref(),
            Some("Akali")
        );
        assert_eq!(prompt.offered, ["Akali"]);
    }

    #[test]
    fn no_match_asks_for_a_retry() {
        let t = table(&["Aatrox"]);
        let mut prompt = Scripted::new(vec![], vec!["Aatrox"]);
        assert_eq!(
            resolve_name(&t, &mut prompt, "Zilean").as_deref(),
            Some("Aatrox")
        );
    }

    #[test]
    fn blank_input_and_blank_retry_cancel() {
        let t = table(&["Aatrox"]);
        let mut prompt = Scripted::new(vec![], vec![]);
        assert_eq!(resolve_name(&t, &mut prompt, ""), None);
        assert_eq!(resolve_name(&t, &mut prompt, "Zilean"), None);
    }

    #[test]
    fn exact_lookup_never_goes_fuzzy() {
        let t = table(&["Aatrox"]);
        assert_eq!(exact_key(&t, "AATROX").unwrap(), "Aatrox");
        assert!(exact_key(&t, "atro").is_err());
    }

    #[test]
    fn capitalize_for_prompts() {
        assert_eq!(capitalize("champion"), "Champion");
        assert_eq!(capitalize(""), "");
    }
}
