use ansi_color_codes::{Color, ColorCode, Intensity, Style, Target};

fn main() {
    let bright_green = ColorCode::new(Style::new(
        Color::Green,
        Target::Foreground,
        Intensity::Bright,
    ));

    println!(
        "{}This text is green. {}And the color on this text has been reset.",
        bright_green.code(),
        bright_green.reset_code(),
    );
    println!();
    println!(
        "The escape sequence used to change the text color is: {}",
        bright_green.escaped()
    );
}
