//! The builtin laundry service dataset.
//!
//! Six Dubai-area services with realistic pricing and contact details.
//! This data is never written to the cache; it is served directly when
//! requested.

use std::collections::BTreeMap;

use crate::models::{ContactInfo, LaundryService, Location};

#[allow(clippy::too_many_arguments)]
fn service(
    id: &str,
    name: &str,
    rating: f64,
    review_count: u32,
    distance: f64,
    price_range: &str,
    (latitude, longitude, address): (f64, f64, &str),
    (phone, email, whatsapp): (&str, &str, &str),
    prices: &[(&str, &str)],
    opening_hours: &str,
    delivery_time: &str,
    is_open: bool,
) -> LaundryService {
    LaundryService {
        id: id.to_string(),
        name: name.to_string(),
        rating,
        review_count,
        distance,
        price_range: price_range.to_string(),
        location: Location {
            latitude,
            longitude,
            address: address.to_string(),
        },
        contact: ContactInfo {
            phone: phone.to_string(),
            email: email.to_string(),
            whatsapp: whatsapp.to_string(),
        },
        services: prices.iter().map(|(name, _)| name.to_string()).collect(),
        service_prices: prices
            .iter()
            .map(|(name, price)| (name.to_string(), price.to_string()))
            .collect::<BTreeMap<_, _>>(),
        opening_hours: opening_hours.to_string(),
        delivery_time: delivery_time.to_string(),
        is_open,
    }
}

/// All builtin laundry services.
///
/// Returns a freshly built list so callers may take ownership.
pub fn builtin_services() -> Vec<LaundryService> {
    vec![
        service(
            "1",
            "Express Wash & Dry",
            4.8,
            234,
            0.5,
            "$$",
            (25.2048, 55.2708, "Dubai Marina, Dubai"),
            (
                "+971-50-123-4567",
                "contact@expresswash.ae",
                "+971501234567",
            ),
            &[
                ("Wash", "$8"),
                ("Dry", "$12"),
                ("Iron", "$6"),
                ("Express Service", "$15"),
            ],
            "8:00 AM - 10:00 PM",
            "2-3 hours",
            true,
        ),
        service(
            "2",
            "Premium Clean Laundry",
            4.9,
            456,
            1.2,
            "$$$",
            (25.2154, 55.2796, "Jumeirah Beach Residence, Dubai"),
            ("+971-50-234-5678", "info@premiumclean.ae", "+971502345678"),
            &[
                ("Wash", "$9"),
                ("Dry", "$13"),
                ("Iron", "$7"),
                ("Dry Cleaning", "$18"),
                ("Stain Removal", "$10"),
            ],
            "7:00 AM - 11:00 PM",
            "3-4 hours",
            true,
        ),
        service(
            "3",
            "Quick Spin Laundromat",
            4.5,
            189,
            0.8,
            "$",
            (25.1972, 55.2744, "Dubai Internet City, Dubai"),
            ("+971-50-345-6789", "hello@quickspin.ae", "+971503456789"),
            &[("Wash", "$6"), ("Dry", "$8"), ("Self-Service", "$4")],
            "24 Hours",
            "1-2 hours",
            true,
        ),
        service(
            "4",
            "Fresh & Clean Services",
            4.7,
            312,
            1.5,
            "$$",
            (25.2192, 55.2816, "Palm Jumeirah, Dubai"),
            (
                "+971-50-456-7890",
                "support@freshclean.ae",
                "+971504567890",
            ),
            &[
                ("Wash", "$8"),
                ("Dry", "$11"),
                ("Iron", "$6"),
                ("Pickup & Delivery", "$12"),
            ],
            "6:00 AM - 11:00 PM",
            "4-6 hours",
            true,
        ),
        service(
            "5",
            "Hotel Laundry Express",
            4.6,
            278,
            2.1,
            "$$$",
            (25.2012, 55.2656, "Business Bay, Dubai"),
            (
                "+971-50-567-8901",
                "service@hotellaundry.ae",
                "+971505678901",
            ),
            &[
                ("Wash", "$9"),
                ("Dry", "$12"),
                ("Iron", "$7"),
                ("Same Day Service", "$16"),
                ("Hotel Pickup", "$10"),
            ],
            "24 Hours",
            "2-3 hours",
            true,
        ),
        service(
            "6",
            "Eco Wash Center",
            4.4,
            156,
            1.8,
            "$$",
            (25.2088, 55.2632, "Sheikh Zayed Road, Dubai"),
            ("+971-50-678-9012", "contact@ecowash.ae", "+971506789012"),
            &[
                ("Eco-Friendly Wash", "$10"),
                ("Dry", "$12"),
                ("Iron", "$7"),
                ("Steam Clean", "$14"),
            ],
            "8:00 AM - 9:00 PM",
            "3-5 hours",
            false,
        ),
    ]
}

/// Look up a builtin service by its id.
pub fn builtin_service_by_id(id: &str) -> Option<LaundryService> {
    builtin_services().into_iter().find(|s| s.id == id)
}
