use wordseek::{DirectionLabel, WordSearch, WordSearchConfig};

fn main() {
    let words = [
        String::from("comet"),
        String::from("nebula"),
        String::from("orbit"),
        String::from("quasar"),
        String::from("asteroid"),
        String::from("eclipse"),
        String::from("gravity"),
        String::from("lunar"),
        String::from("meteor"),
    ];

    let word_search = WordSearch::new(&WordSearchConfig {
        width: 15,
        height: 15,
        words: &words,
        directions: &[
            DirectionLabel::Horizontal,
            DirectionLabel::Vertical,
            DirectionLabel::Diagonal,
            DirectionLabel::Reverse,
        ],
    });

    println!("{}", word_search);

    println!("Answer key:");
    for placement in word_search.placements() {
        println!(
            "  {}: ({}, {}) -> ({}, {})",
            placement.word,
            placement.start.0,
            placement.start.1,
            placement.end.0,
            placement.end.1,
        );
    }
}
