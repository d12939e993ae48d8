use dc_holidays::REGIONS;

pub fn handle_regions() {
    for region in REGIONS {
        let names: Vec<&str> = region.rules.iter().map(|r| r.name).collect();
        println!("{}  {:<20}  {}", region.code, region.name, names.join(", "));
    }
}
