/*!
 * End-to-end tests: detect, parse, write and parse again
 */

use anyhow::Result;
use subrip::model::{Style, SubtitleCollection, SubtitleEvent};
use subrip::{Config, SubripFormat, SubtitleFormat};

use crate::common;

#[test]
fn test_sampleFile_detectParseWrite_shouldProduceCanonicalOutput() {
    common::init_logger();
    let format = SubripFormat::new();

    assert_eq!(format.guess_format(common::SAMPLE_SRT), Some(SubtitleFormat::Srt));

    let subs = format.parse_str(common::SAMPLE_SRT);
    let output = format.to_string(&subs);

    assert_eq!(
        output,
        "1\n00:00:01,000 --> 00:00:04,000\nThis is a <i>test</i> subtitle.\n\n\
         2\n00:00:05,000 --> 00:00:09,000\nIt contains\nmultiple lines.\n\n\
         3\n00:00:10,000 --> 00:00:14,000\n<u>For</u> testing purposes.\n\n"
    );
}

#[test]
fn test_writtenOutput_whenParsedAgain_shouldGiveSameEvents() {
    let format = SubripFormat::new();

    let first = format.parse_str(common::SAMPLE_SRT);
    let second = format.parse_str(&format.to_string(&first));

    assert_eq!(first.events, second.events);
}

#[test]
fn test_eventsWithStyles_whenWrittenAndParsed_shouldKeepStyleRuns() {
    let mut subs = SubtitleCollection::new();
    subs.styles.insert("Whisper", Style::italic());
    subs.push(SubtitleEvent::new(500, 1_500, "quiet words").with_style("Whisper"));
    subs.push(SubtitleEvent::new(2_000, 3_000, r"{\s1}struck{\s0} and {\u1}under{\u0}"));

    let format = SubripFormat::new();
    let written = format.to_string(&subs);
    let parsed = format.parse_str(&written);

    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed.events[0].text, r"{\i1}quiet words{\i0}");
    assert_eq!(parsed.events[1].text, r"{\s1}struck{\s0} and {\u1}under{\u0}");
    assert_eq!(parsed.events[1].start_ms, 2_000);
}

#[test]
fn test_messyInput_shouldRecoverEveryBlock() {
    let messy = "garbage line\n\
                 1\n\
                 00:00:01,000 --> 00:00:02,000\n\
                 <I>Loud</I> <b>noise</b>\n\
                 2\n\
                 00:00:03.000 --> 00:00:04.000 X1:0\n\
                 \n\
                 Spaced out\n\
                 \n\
                 \n\
                 3\n\
                 00:00:05,000 --> 00:00:06,000\n\
                 Last\n";

    let subs = SubripFormat::new().parse_str(messy);

    assert_eq!(subs.len(), 3);
    assert_eq!(subs.events[0].text, r"{\i1}Loud{\i0} noise");
    assert_eq!(subs.events[1].text, "Spaced out");
    assert_eq!(subs.events[1].start_ms, 3_000);
    assert_eq!(subs.events[2].text, "Last");
}

#[test]
fn test_configFile_shouldDriveFormat() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "subrip.json",
        r#"{ "reader": { "keep_unknown_html_tags": true }, "writer": { "keep_ssa_tags": true } }"#,
    )?;
    let config = Config::from_file(&path)?;
    config.apply_log_level();

    let format = SubripFormat::with_config(&config);
    let subs = format.parse_str("1\n00:00:01,000 --> 00:00:02,000\n<b>Bold</b> <i>it</i>\n");
    assert_eq!(subs.events[0].text, r"<b>Bold</b> {\i1}it{\i0}");

    let output = format.to_string(&subs);
    assert!(output.contains("\n<b>Bold</b> {\\i1}it{\\i0}\n"));
    Ok(())
}
