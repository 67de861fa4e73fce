//! Seed catalog loaded at service start.
//!
//! Listing creation is out of band for the engine; this module is that
//! band. The binary hands these to [`crate::MemoryListingCatalog::new`].

use lk_core::Listing;

fn listing(
    id: u64,
    title: &str,
    description: &str,
    location: &str,
    price_per_night: u64,
    photos: &[&str],
    amenities: &[&str],
) -> Listing {
    Listing {
        id,
        title: title.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        price_per_night,
        photos: photos.iter().map(|p| p.to_string()).collect(),
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
    }
}

/// Six starter listings. Prices are minor currency units (cents).
pub fn sample_listings() -> Vec<Listing> {
    vec![
        listing(
            1,
            "Cozy Downtown Apartment",
            "A bright one-bedroom in the heart of the city, steps from transit.",
            "New York, NY",
            12_000,
            &["downtown-1.jpg", "downtown-2.jpg"],
            &["WiFi", "Kitchen", "AC"],
        ),
        listing(
            2,
            "Beachfront Villa",
            "Oceanfront property with a private stretch of sand.",
            "Miami, FL",
            35_000,
            &["villa-1.jpg", "villa-2.jpg"],
            &["Pool", "Beach access", "WiFi", "Parking"],
        ),
        listing(
            3,
            "Mountain Cabin Retreat",
            "Quiet cabin at the trailhead, wood stove included.",
            "Aspen, CO",
            8_500,
            &["cabin-1.jpg"],
            &["Fireplace", "Hiking trails", "WiFi"],
        ),
        listing(
            4,
            "Historic Brownstone",
            "A restored nineteenth-century home on a tree-lined street.",
            "Boston, MA",
            20_000,
            &["brownstone-1.jpg", "brownstone-2.jpg"],
            &["WiFi", "Kitchen", "Garden", "Parking"],
        ),
        listing(
            5,
            "Modern Loft",
            "Top-floor loft with skyline views and an open floor plan.",
            "San Francisco, CA",
            18_000,
            &["loft-1.jpg"],
            &["WiFi", "City views", "Gym access"],
        ),
        listing(
            6,
            "Country Farmhouse",
            "Working farmhouse on several acres, breakfast eggs included.",
            "Austin, TX",
            9_500,
            &["farm-1.jpg", "farm-2.jpg"],
            &["WiFi", "Farm experience", "Large kitchen"],
        ),
    ]
}
