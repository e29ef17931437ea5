use crate::{Colors, Tone};

#[test]
fn disabled_colors_leave_text_alone() {
    assert_eq!(Colors::OFF.paint(Tone::TypeName, "love.Image"), "love.Image");
    assert_eq!(Colors::default(), Colors::OFF);
}

#[test]
fn each_tone_has_its_own_code() {
    let colors = Colors::new(true);

    assert_eq!(colors.paint(Tone::Heading, "known"), "\x1b[2mknown\x1b[0m");
    assert_eq!(colors.paint(Tone::TypeName, "Image"), "\x1b[34mImage\x1b[0m");
    assert_eq!(colors.paint(Tone::Phrase, "light userdata"), "\x1b[32mlight userdata\x1b[0m");
}
