use crate::commands::{create, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ContactFields;
use crate::store::ContactStore;
use tracing::debug;

struct Sample {
    marvel_id: &'static str,
    first: &'static str,
    last: &'static str,
    avatar: &'static str,
    super_name: &'static str,
    url: &'static str,
    notes: &'static str,
    favorite: bool,
}

const SAMPLES: [Sample; 3] = [
    Sample {
        marvel_id: "1009368",
        first: "Tony",
        last: "Stark",
        avatar: "http://i.annihil.us/u/prod/marvel/i/mg/9/c0/527bb7b37ff55/detail.jpg",
        super_name: "Iron Man",
        url: "https://www.marvel.com/characters/iron-man-tony-stark",
        notes: "Wounded, captured and forced to build a weapon by his enemies, billionaire industrialist Tony Stark instead created an advanced suit of armor to save his life and escape captivity. Now with a new outlook on life, Tony uses his money and intelligence to make the world a safer, better place as Iron Man.",
        favorite: true,
    },
    Sample {
        marvel_id: "1009220",
        first: "Steve",
        last: "Rogers",
        avatar: "http://i.annihil.us/u/prod/marvel/i/mg/3/50/537ba56d31087/detail.jpg",
        super_name: "Captain America",
        url: "https://www.marvel.com/characters/captain-america-steve-rogers",
        notes: "Vowing to serve his country any way he could, young Steve Rogers took the super soldier serum to become America's one-man army. Fighting for the red, white and blue for over 60 years, Captain America is the living, breathing symbol of freedom and liberty.",
        favorite: false,
    },
    Sample {
        marvel_id: "1009610",
        first: "Peter",
        last: "Parker",
        avatar: "http://i.annihil.us/u/prod/marvel/i/mg/3/50/526548a343e4b/detail.jpg",
        super_name: "Spider-Man",
        url: "https://www.marvel.com/characters/spider-man-peter-parker",
        notes: "Bitten by a radioactive spider, high school student Peter Parker gained the speed, strength and powers of a spider. Adopting the name Spider-Man, Peter hoped to start a career using his new abilities. Taught that with great power comes great responsibility, Spidey has vowed to use his powers to help people.",
        favorite: false,
    },
];

/// Lower-cased super name with its first space turned into a dash.
pub fn sample_id(super_name: &str) -> String {
    super_name.to_lowercase().replacen(' ', "-", 1)
}

/// The three sample contacts as `(id, fields)` pairs.
pub fn sample_contacts() -> Vec<(String, ContactFields)> {
    SAMPLES
        .iter()
        .map(|s| {
            (
                sample_id(s.super_name),
                ContactFields {
                    first: Some(s.first.to_string()),
                    last: Some(s.last.to_string()),
                    super_name: Some(s.super_name.to_string()),
                    avatar: Some(s.avatar.to_string()),
                    url: Some(s.url.to_string()),
                    notes: Some(s.notes.to_string()),
                    favorite: Some(s.favorite),
                    marvel_id: Some(s.marvel_id.to_string()),
                },
            )
        })
        .collect()
}

/// Inserts the sample contacts.
pub fn run<S: ContactStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for (id, fields) in sample_contacts() {
        let created = create::run(store, Some(id), fields)?;
        result.affected_contacts.extend(created.affected_contacts);
    }
    debug!(count = result.affected_contacts.len(), "seeded sample contacts");
    result.add_message(CmdMessage::info(format!(
        "Seeded {} sample contacts",
        result.affected_contacts.len()
    )));
    Ok(result)
}
