use anyhow::Result;

use gwanak_core::content::SiteContent;

pub fn run(json: bool) -> Result<()> {
    let content = SiteContent::builtin();

    if json {
        println!("{}", serde_json::to_string_pretty(&content.slides)?);
        return Ok(());
    }

    println!("Campus slides ({}):\n", content.slides.len());
    for (index, slide) in content.slides.iter().enumerate() {
        println!("  {}. {}", index + 1, slide.title);
        println!("     {}", slide.description);
        println!("     Location: {}", slide.location);
        println!("     Image: {}", slide.image);
        println!();
    }

    Ok(())
}
