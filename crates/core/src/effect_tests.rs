use super::*;

#[test]
fn narration_matches_the_workshop_voice() {
    assert_eq!(Event::CoordinatorAsleep.to_string(), "Santa: I am going to sleep.");
    assert_eq!(
        Event::SleighReady.to_string(),
        "Santa: The nine reindeer arrived, prepare the sleigh."
    );
    assert_eq!(Event::HelpingElves.to_string(), "Santa: Three elves need my help.");
}

#[test]
fn arrival_lines_include_id_and_count() {
    let line = Event::ReindeerBack { id: 4, waiting: 7 }.to_string();
    assert_eq!(line, "Reindeer 4: back from vacation (7/9).");

    let line = Event::ElfNeedsHelp { id: 2, waiting: 1 }.to_string();
    assert_eq!(line, "Elf 2: I have a problem (1/3).");
}

#[test]
fn events_serialize_with_external_tags() {
    let json = serde_json::to_string(&Event::SleighReady).unwrap();
    assert_eq!(json, "\"SleighReady\"");

    let json = serde_json::to_string(&Event::ReindeerBack { id: 1, waiting: 1 }).unwrap();
    assert_eq!(json, "{\"ReindeerBack\":{\"id\":1,\"waiting\":1}}");
}
