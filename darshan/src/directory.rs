//! Curated directory of temple channels.

use serde::Serialize;

/// A curated temple channel: a channel id on the video platform plus display
/// metadata.
///
/// Entries are editorial constants, not fetched data; the directory drives
/// channel-scoped browsing in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TempleChannel {
    /// The video platform's channel id.
    pub id: &'static str,
    /// Display name of the temple or trust running the channel.
    pub name: &'static str,
    /// Where the temple is located.
    pub location: &'static str,
}

/// Number of leading entries for temples in India; the remainder stream from
/// temples abroad. Segmentation is positional, so new domestic entries go
/// before this index and international ones after.
const DOMESTIC_LEN: usize = 25;

const TEMPLE_CHANNELS: &[TempleChannel] = &[
    TempleChannel {
        id: "UC5N3z_CvEtLARUJg7rZnHgA",
        name: "Shri Siddhivinayak Temple",
        location: "Mumbai",
    },
    TempleChannel {
        id: "UCi1v-92aO0s-kYV8uEJ2TFQ",
        name: "Varanasi Live Ganga Aarti",
        location: "Varanasi",
    },
    TempleChannel {
        id: "UCOXLZKOzZI-JrMBE4AmKGWQ",
        name: "Tirumala Tirupati Devasthanams",
        location: "Tirupati",
    },
    TempleChannel {
        id: "UCv5C1-FgrEUXLmVrTl0qvFg",
        name: "Shree Somnath Trust",
        location: "Gujarat",
    },
    TempleChannel {
        id: "UCPasF3QY3ut64Nrn8aA_alA",
        name: "Sri Venkateswara Swamy Devasthanam",
        location: "Tirumala",
    },
    TempleChannel {
        id: "UCIC9hR1jHiwBKOI3qH1KBSQ",
        name: "Kashi Vishwanath Temple",
        location: "Varanasi",
    },
    TempleChannel {
        id: "UCZmEb1AXXTbJn7MJnM3E3xA",
        name: "ISKCON Mayapur",
        location: "West Bengal",
    },
    TempleChannel {
        id: "UC4vg1b1gUMux_sBtP3pZF-Q",
        name: "Jagannath Temple Puri",
        location: "Odisha",
    },
    TempleChannel {
        id: "UCzR0jl-YhTXcEcE2ATKcFOA",
        name: "Shree Padmanabhaswamy Temple",
        location: "Kerala",
    },
    TempleChannel {
        id: "UCYQ9IBKYZNYQIYUQzuu7WNw",
        name: "Kedarnath Temple Live",
        location: "Uttarakhand",
    },
    TempleChannel {
        id: "UCRYPuUOChmxBpAfL8OXpFLw",
        name: "Badrinath Temple",
        location: "Uttarakhand",
    },
    TempleChannel {
        id: "UCHFUmSDvUN8-osNlJD4uuQA",
        name: "Meenakshi Temple",
        location: "Madurai",
    },
    TempleChannel {
        id: "UCWc6HCVs1mXwCvcnO2cKkCQ",
        name: "Akshardham Temple",
        location: "Delhi",
    },
    TempleChannel {
        id: "UCXiwuYI3LxESWFvqLJQR5_g",
        name: "ISKCON Bangalore",
        location: "Karnataka",
    },
    TempleChannel {
        id: "UCPGDHhn2yx4_YHqzBkbg2lA",
        name: "Sai Baba Shirdi Sansthan",
        location: "Maharashtra",
    },
    TempleChannel {
        id: "UCbMQg5MDZOi8-XiRUrzTsOw",
        name: "Shree Kashi Vishwanath",
        location: "Varanasi",
    },
    TempleChannel {
        id: "UC85YS9iYPxfmHm0XcR_6nTg",
        name: "Mahakaleshwar Temple",
        location: "Ujjain",
    },
    TempleChannel {
        id: "UCUBnEusmPbm3nRSBWeQnwkw",
        name: "Kamakhya Temple",
        location: "Assam",
    },
    TempleChannel {
        id: "UCm-lNeBFXb3zKWfYYcG15bQ",
        name: "Rameshwaram Temple",
        location: "Tamil Nadu",
    },
    TempleChannel {
        id: "UC9fLpUuT7i4s_TjFpWTuqJA",
        name: "Kanchipuram Temples",
        location: "Tamil Nadu",
    },
    TempleChannel {
        id: "UC6BX-hKE1jKm-VyfAScVPLA",
        name: "Sri Krishna Matha",
        location: "Udupi",
    },
    TempleChannel {
        id: "UCb0q4LkzXPR3q4Rk9RQ-GxA",
        name: "Brahma Temple",
        location: "Pushkar",
    },
    TempleChannel {
        id: "UCD54BjM9HUweGSbVvq7kXAA",
        name: "Brihadeeswarar Temple",
        location: "Thanjavur",
    },
    TempleChannel {
        id: "UCmEYysYxHLPz1Y8XDsLcL-g",
        name: "Dakshineshwar Kali Temple",
        location: "Kolkata",
    },
    TempleChannel {
        id: "UCnkxPx6awLgVhMKrAG9eobA",
        name: "Ramanathaswamy Temple",
        location: "Rameshwaram",
    },
    TempleChannel {
        id: "UCPWBhJNHf7LZjUzCKkmSX5w",
        name: "BAPS Swaminarayan Mandir",
        location: "London, UK",
    },
    TempleChannel {
        id: "UCQCvVpj5kSHDlIzHGO8shKQ",
        name: "Sri Venkateswara Temple",
        location: "Pittsburgh, USA",
    },
    TempleChannel {
        id: "UCCPtdKGdMNzkiG94H_CfttA",
        name: "Sri Siva Vishnu Temple",
        location: "Maryland, USA",
    },
    TempleChannel {
        id: "UC_mcZFtG5OkEqR0ViJZx5uw",
        name: "Shri Lakshmi Narayan Mandir",
        location: "Toronto, Canada",
    },
    TempleChannel {
        id: "UCF_n0CZiICgGCDQKs84BnXQ",
        name: "Murugan Temple",
        location: "Sydney, Australia",
    },
    TempleChannel {
        id: "UCZKGgbCp1Mya47XZrk21mXQ",
        name: "ISKCON Melbourne",
        location: "Australia",
    },
];

/// The full curated directory, in editorial order: the domestic block first,
/// then the international block.
pub fn temple_channels() -> &'static [TempleChannel] {
    TEMPLE_CHANNELS
}

/// The temples located in India.
pub fn domestic() -> &'static [TempleChannel] {
    &TEMPLE_CHANNELS[..DOMESTIC_LEN]
}

/// The temples located outside India.
pub fn international() -> &'static [TempleChannel] {
    &TEMPLE_CHANNELS[DOMESTIC_LEN..]
}
