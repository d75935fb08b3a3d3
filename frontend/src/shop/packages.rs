pub const USD_TO_INR: u32 = 83;

#[derive(Debug, PartialEq)]
pub struct Package {
    pub name: &'static str,
    pub usd: u32,
    pub features: [&'static str; 4],
    pub hosting_included: bool,
}

impl Package {
    pub fn price(&self) -> u32 {
        self.usd * USD_TO_INR
    }

    pub fn is_featured(&self) -> bool {
        self.name == "Standard"
    }

    pub fn includes_note(&self) -> &'static str {
        if self.hosting_included {
            "Domain & Hosting: ✅"
        } else {
            "Domain & Hosting: ❌"
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub packages: [Package; 3],
}

pub static SERVICES: [Service; 4] = [
    Service {
        title: "Portfolio Websites",
        packages: [
            Package { name: "Basic", usd: 100, features: ["Single Page Layout", "Up to 5 Projects", "Responsive Design", "Contact Form"], hosting_included: false },
            Package { name: "Standard", usd: 180, features: ["All Basic Features", "Multi-Page Site", "CMS for Projects", "Custom Animations"], hosting_included: true },
            Package { name: "Advanced", usd: 250, features: ["All Standard Features", "Case Study Pages", "Advanced Filtering", "Priority Support"], hosting_included: true },
        ],
    },
    Service {
        title: "Landing Pages",
        packages: [
            Package { name: "Basic", usd: 140, features: ["Single Page Design", "Responsive Layout", "Contact Form", "3 Day Delivery"], hosting_included: false },
            Package { name: "Standard", usd: 250, features: ["All Basic Features", "Simple Animations", "Content Upload", "5 Day Delivery"], hosting_included: true },
            Package { name: "Advanced", usd: 300, features: ["All Standard Features", "Complex GSAP Animations", "A/B Testing Setup", "7 Day Delivery"], hosting_included: true },
        ],
    },
    Service {
        title: "Business Websites",
        packages: [
            Package { name: "Basic", usd: 350, features: ["Up to 5 Pages", "Custom Design", "Stock Photos", "Basic SEO"], hosting_included: true },
            Package { name: "Standard", usd: 600, features: ["All Basic Features", "CMS Integration", "Blog Setup", "Social Media Integration"], hosting_included: true },
            Package { name: "Advanced", usd: 900, features: ["All Standard Features", "Advanced Animations", "Lead Magnet Setup", "Analytics Dashboard"], hosting_included: true },
        ],
    },
    Service {
        title: "E-commerce Stores",
        packages: [
            Package { name: "Basic", usd: 800, features: ["Up to 20 Products", "Payment Gateway Setup", "Basic Inventory", "Standard Themes"], hosting_included: true },
            Package { name: "Standard", usd: 1400, features: ["All Basic Features", "Up to 100 Products", "Custom Theme Design", "Customer Accounts"], hosting_included: true },
            Package { name: "Advanced", usd: 1800, features: ["All Standard Features", "Unlimited Products", "Advanced Shipping", "API Integrations"], hosting_included: true },
        ],
    },
];

/// `₹` plus the amount in comma separated groups of three (`₹149,400`).
pub fn format_inr(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₹{}", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_convert_from_usd() {
        assert_eq!(SERVICES[0].packages[0].price(), 8300);
        assert_eq!(SERVICES[3].packages[2].price(), 149_400);
    }

    #[test]
    fn standard_is_featured() {
        for service in &SERVICES {
            let featured: Vec<_> = service.packages.iter().filter(|p| p.is_featured()).collect();
            assert_eq!(featured.len(), 1);
            assert_eq!(featured[0].name, "Standard");
        }
    }

    #[test]
    fn formats_thousands() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(830), "₹830");
        assert_eq!(format_inr(8300), "₹8,300");
        assert_eq!(format_inr(149_400), "₹149,400");
        assert_eq!(format_inr(1_234_567), "₹1,234,567");
    }

    #[test]
    fn hosting_note() {
        assert_eq!(SERVICES[0].packages[0].includes_note(), "Domain & Hosting: ❌");
        assert_eq!(SERVICES[0].packages[1].includes_note(), "Domain & Hosting: ✅");
    }
}
