use emeprobe::config::MediaKeySystemConfig;

fn main() -> anyhow::Result<()> {
    let presets = [
        ("software", MediaKeySystemConfig::software()),
        ("hardware", MediaKeySystemConfig::hardware()),
    ];

    for (name, config) in presets {
        println!("--- {name} ---");
        println!("{}", serde_json::to_string_pretty(&config)?);
    }

    Ok(())
}
