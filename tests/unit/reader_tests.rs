/*!
 * Tests for parsing SubRip text into events
 */

use std::io::Cursor;

use anyhow::Result;
use subrip::{Config, SubripFormat, SubtitleFormat};

use crate::common;

#[test]
fn test_parseStr_withSingleBlock_shouldTranslateItalics() {
    let subs =
        SubripFormat::new().parse_str("1\n00:00:01,000 --> 00:00:04,000\nHello <i>world</i>\n");

    assert_eq!(subs.len(), 1);
    let event = &subs.events[0];
    assert_eq!(event.start_ms, 1_000);
    assert_eq!(event.end_ms, 4_000);
    assert_eq!(event.text, r"Hello {\i1}world{\i0}");
    assert_eq!(event.style_name, "Default");
    assert!(!event.is_comment);
}

#[test]
fn test_parseStr_withSampleFile_shouldParseEveryBlock() {
    common::init_logger();
    let subs = SubripFormat::new().parse_str(common::SAMPLE_SRT);

    assert_eq!(subs.len(), 3);
    assert_eq!(subs.events[0].text, r"This is a {\i1}test{\i0} subtitle.");
    assert_eq!(subs.events[1].text, r"It contains\Nmultiple lines.");
    assert_eq!(subs.events[2].text, r"{\u1}For{\u0} testing purposes.");
    assert_eq!(subs.events[2].start_ms, 10_000);
    assert_eq!(subs.events[2].end_ms, 14_000);
}

#[test]
fn test_parseStr_withoutBlankSeparator_shouldStripLeakedIndex() {
    let srt = "1\n00:00:01,000 --> 00:00:02,000\nFirst\n2\n00:00:03,000 --> 00:00:04,000\nSecond\n";
    let subs = SubripFormat::new().parse_str(srt);

    assert_eq!(subs.len(), 2);
    assert_eq!(subs.events[0].text, "First");
    assert_eq!(subs.events[1].text, "Second");
}

#[test]
fn test_parseStr_withoutIndexLines_shouldStillParse() {
    let srt = "00:00:01,000 --> 00:00:02,000\nFirst\n\n00:00:03,000 --> 00:00:04,000\nSecond\n";
    let subs = SubripFormat::new().parse_str(srt);

    assert_eq!(subs.len(), 2);
    assert_eq!(subs.events[0].text, "First");
}

#[test]
fn test_parseStr_withCrlfLineEndings_shouldParse() {
    let srt = "1\r\n00:00:01,000 --> 00:00:02,000\r\nHi\r\nthere\r\n\r\n";
    let subs = SubripFormat::new().parse_str(srt);

    assert_eq!(subs.len(), 1);
    assert_eq!(subs.events[0].text, r"Hi\Nthere");
}

#[test]
fn test_parseStr_withCarriageReturnOnlyLineEndings_shouldParse() {
    let srt = "1\r00:00:01,000 --> 00:00:02,000\rA\rB\r\r2\r00:00:03,000 --> 00:00:04,000\rC\r";
    let format = SubripFormat::new();

    assert_eq!(format.guess_format(srt), Some(SubtitleFormat::Srt));
    let subs = format.parse_str(srt);
    assert_eq!(subs.len(), 2);
    assert_eq!(subs.events[0].text, r"A\NB");
    assert_eq!(subs.events[1].text, "C");
}

#[test]
fn test_readFrom_withCarriageReturnOnlyLineEndings_shouldMatchParseStr() -> Result<()> {
    let srt = "1\r00:00:01,000 --> 00:00:02,000\rA\rB\r\r2\r00:00:03,000 --> 00:00:04,000\rC\r";
    let format = SubripFormat::new();

    let from_stream = format.read_from(Cursor::new(srt.as_bytes()))?;
    assert_eq!(from_stream.len(), 2);
    assert_eq!(from_stream.events, format.parse_str(srt).events);
    Ok(())
}

#[test]
fn test_parseStr_withOverflowingHours_shouldStillOpenEvent() {
    let srt = "1\n99999999999999999:00:00,000 --> 00:00:01,000\nA\n";
    let format = SubripFormat::new();

    assert_eq!(format.guess_format(srt), Some(SubtitleFormat::Srt));
    let subs = format.parse_str(srt);
    assert_eq!(subs.len(), 1);
    assert_eq!(subs.events[0].text, "A");
    assert!(format.to_string(&subs).contains("99:59:59,999 --> 00:00:01,000"));
}

#[test]
fn test_parseStr_withContentBeforeFirstTimingLine_shouldDiscardIt() {
    let srt = "WEBVTT-ish header\n\n7\n00:00:01,000 --> 00:00:02,000\nText\n";
    let subs = SubripFormat::new().parse_str(srt);

    assert_eq!(subs.len(), 1);
    assert_eq!(subs.events[0].text, "Text");
}

#[test]
fn test_parseStr_withEmptyBlock_shouldKeepEmptyEvent() {
    let srt = "00:00:01,000 --> 00:00:02,000\n\n00:00:03,000 --> 00:00:04,000\nText\n";
    let subs = SubripFormat::new().parse_str(srt);

    assert_eq!(subs.len(), 2);
    assert_eq!(subs.events[0].text, "");
    assert_eq!(subs.events[1].text, "Text");
}

#[test]
fn test_parseStr_withoutTimingLines_shouldReturnEmptyCollection() {
    common::init_logger();
    assert!(SubripFormat::new().parse_str("Just\nsome\ntext\n").is_empty());
    assert!(SubripFormat::new().parse_str("").is_empty());
}

#[test]
fn test_parseStr_withOutOfRangeTimes_shouldKeepThemUnclamped() {
    let subs = SubripFormat::new().parse_str("150:00:00,000 --> 150:00:01,000\nLate\n");
    assert_eq!(subs.events[0].start_ms, 150 * 3_600_000);
    assert_eq!(subs.events[0].end_ms, 150 * 3_600_000 + 1_000);
}

#[test]
fn test_parseStr_withUnknownTags_shouldDropThem() {
    let subs = SubripFormat::new().parse_str(
        "1\n00:00:01,000 --> 00:00:02,000\n<b>Bold</b> and <font color=\"#00ff00\">green</font>\n",
    );
    assert_eq!(subs.events[0].text, "Bold and green");
}

#[test]
fn test_parseStr_withKeepUnknownTags_shouldKeepThem() {
    let mut config = Config::default();
    config.reader.keep_unknown_html_tags = true;

    let subs = SubripFormat::with_config(&config)
        .parse_str("1\n00:00:01,000 --> 00:00:02,000\n<b><i>Bold</i></b>\n");
    assert_eq!(subs.events[0].text, r"<b>{\i1}Bold{\i0}</b>");
}

#[test]
fn test_parseInto_shouldAppendToExistingEvents() {
    let format = SubripFormat::new();
    let mut subs = format.parse_str("00:00:01,000 --> 00:00:02,000\nOne\n");
    format.parse_into("00:00:03,000 --> 00:00:04,000\nTwo\n", &mut subs);

    assert_eq!(subs.len(), 2);
    assert_eq!(subs.events[1].text, "Two");
}

#[test]
fn test_readFrom_withBufferedStream_shouldMatchParseStr() -> Result<()> {
    let format = SubripFormat::new();
    let from_stream = format.read_from(Cursor::new(common::SAMPLE_SRT.as_bytes()))?;
    let from_str = format.parse_str(common::SAMPLE_SRT);

    assert_eq!(from_stream.events, from_str.events);
    Ok(())
}

#[test]
fn test_readFrom_withInvalidUtf8_shouldReturnError() {
    let bytes: &[u8] = b"00:00:01,000 --> 00:00:02,000\n\xff\xfe\n";
    assert!(SubripFormat::new().read_from(Cursor::new(bytes)).is_err());
}
