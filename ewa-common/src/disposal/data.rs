//! Built-in disposal reference tables
//!
//! Authorized e-waste collection points in India, grouped by state, and
//! per-category handling guidance.

use crate::ItemCategory;

/// `(id, state, city, address, contact)`
pub(super) const COLLECTION_CENTERS: &[(&str, &str, &str, &str, &str)] = &[
    ("1", "UTTAR_PRADESH", "Greater Noida", "A-58, Udyog Kendra, ECOTECH –III, Vill Habibpur, Surajpur", "Sultan: 9540943280 Toll Free No. 1800-2700-038"),
    ("2", "UTTAR_PRADESH", "Ghaziabad", "F636/637, MG Road", "Sultan: 9540943280 Toll Free No. 1800-2700-038"),
    ("3", "UTTAR_PRADESH", "Noida", "C-98, Sector 4", "Sultan: 9540943280 Toll Free No. 1800-2700-038"),
    ("4", "DELHI", "Delhi", "Gali No-3, 358-A, Plot No – 21, Friends ColonySahadra", "Sultan: 9540943280 Toll Free No. 1800-2700-038"),
    ("5", "HARYANA", "Noida", "Auctus E Recycling Solution, NCR based recycling facility", "Sultan: 9540943280 Toll Free No. 1800-2700-038"),
    ("6", "HARYANA", "Delhi", "Auctus E Recycling Solution, NCR based recycling facility", "Sultan: 9540943280 Toll Free No. 1800-2700-038"),
    ("7", "GUJARAT", "Ahmedabad", "Shop No-13, Sai Darshan Shopping Center, Hotel Sai Darshan Compound, Moriya – Patiya Teh – Sanand", "Zaki: 9958746692 Toll Free No. 1800-2700-038"),
    ("8", "DAMAN_&_DIU", "Ahmedabad", "Shop No-13, Sai Darshan Shopping Center, Hotel Sai Darshan Compound, Moriya – Patiya Teh – Sanand", "Zaki: 9958746692 Toll Free No. 1800-2700-038"),
    ("9", "MADHYA_PRADESH", "Bhopal", "Sh. Anar Singh, House no -30, Khajuri Kalan, Mandideep Bye Pass Road", "Lalit: 9761688731 Toll Free No. 1800-2700-038"),
    ("10", "ODISHA", "Bhubaneswar", "Auctus e recycling solutions Pvt Limited Daruthenga, Khurda", "Bangali Prasad: 9339748543 Toll Free No. 1800-2700-038"),
    ("11", "CHATTISGARH", "Bhubaneswar", "Auctus e recycling solutions Pvt Limited Daruthenga, Khurda", "Bangali Prasad: 9339748543 Toll Free No. 1800-2700-038"),
    ("12", "ASSAM", "Kamrup", "Auctus e recycling solutions Pvt limited c/o NairulIslam, Notbam, House Number -3, Hatigaon", "Ravikrant: 9954337060 Toll Free No. 1800-2700-038"),
    ("13", "ANDHRA_PRADESH", "Secundrabad", "Khaja Agency, Behind MMR Garden, RR Nagar, old Bowenpally", "Lalit: 9761688731 Toll Free No. 1800-2700-038"),
    ("14", "KARNATAKA", "Nelmangala", "Smt Seethaamma, Khata No 135 /52, Vinayaka Nagar", "Naved: 9540943204 Toll Free No. 1800-2700-038"),
    ("15", "KERALA", "Nelmangala", "Smt Seethaamma, Khata No 135 /52, Vinayaka Nagar", "Naved: 9540943204 Toll Free No. 1800-2700-038"),
    ("16", "JHARKHAND", "Ranchi", "SIDRAUL, PS Khijra, via Namkom", "Bangali Prasad: 9339748543 Toll Free No. 1800-2700-038"),
    ("17", "BIHAR", "Patna", "Auctus E Recycling Solutions Pvt Limited Phulwarisarif, Naya Tola masjid", "Bangali Prasad: 9339748543 Toll Free No. 1800-2700-038"),
    ("18", "WEST_BENGAL", "Pargana", "Mauja, Gopalpur, Sarkarpool, Jholi No 111 Maheshtala", "Bangali Prasad: 9339748543 Toll Free No. 1800-2700-038"),
    ("19", "UTTRAKHAND", "Hardwar", "Rehmat Traders, Saleempur Chawk, SIDKUL byepass Road, Ranipur", "Ranjan Pandey: 7834960626 Toll Free No. 1800-2700-038"),
    ("20", "PUNJAB", "Ludhiana", "Extension Bhadowal LG warehouse Near Bhadowal Railway Station", "Ranjan Pandey: 7834960626 Toll Free No. 1800-2700-038"),
    ("21", "JAMMU_&_KASHMIR", "Jammu", "Plot No105, Ward No-6 Narwal, Transport Nagar", "Sultan: 9906278323 Toll Free No. 1800-2700-038"),
    ("22", "MAHARASHTRA", "Thane", "Auctus e Recycling solutions Pvt Limited, Arham Logistic Park, Bhiwandi bye pass", "Zaki: 9958746692 Toll Free No. 1800-2700-038"),
    ("23", "RAJASTHAN", "Jaipur", "F – 95, Road No-7, Behind Om Toyota Vishwa Karma Industrial Area", "Rajesh: 9540943281 Toll Free No. 1800-2700-038"),
    ("24", "ARUNACHAL_PRADESH", "Bhalukpong", "Rekha Lamra, Arunachal Pradesh", "Ravinder Kr Rai: 9954337060 Toll Free No. 1800-2700-038"),
    ("25", "MANIPUR", "Thoubal", "M Boney Singh, Tentha Khongbal PO Wangjing", "Ravinder Kr Rai: 9954337060 Toll Free No. 1800-2700-038"),
    ("26", "MEGHALAYA", "Rebhoi", "Raju Mourah 12th Mile, Meghalaya – 793101", "Ravinder Kr Rai: 9954337060 Toll Free No. 1800-2700-038"),
    ("27", "MIZORAM", "Thoubal", "M Boney Singh, Tentha Khongbal PO Wangjing", "Ravinder Kr Rai: 9954337060 Toll Free No. 1800-2700-038"),
    ("28", "NAGALAND", "Dimapur", "Pritam Jaiswal Near ram Janki School", "Ravinder Kr Rai: 9954337060 Toll Free No. 1800-2700-038"),
    ("29", "TELANGANA", "Hyderabad", "E green planet Survey no.559/2 medchal panchayat", "Lalit: 9761688731 Toll Free No. 1800-2700-038"),
    ("30", "TELANGANA", "Hyderabad", "Khaja Agency, Behind MMR Garden, RR Nagar, old Bowenpally, Secundrabad.", "Lalit: 9761688731 Toll Free No. 1800-2700-038"),
    ("31", "TAMILNADU", "Bangalore", "The collection points cater for any pickup from cities of Tamilnadu", "Toll Free No. 1800-2700-038"),
    ("32", "TAMILNADU", "Cochin", "The collection points cater for any pickup from cities of Tamilnadu", "Toll Free No. 1800-2700-038"),
    ("33", "GOA", "Thane", "Auctus e Recycling solutions Pvt Limited, Arham Logistic Park, Bhiwandi bye pass", "Zaki: 9958746692 Toll Free No. 1800-2700-038"),
];

pub(super) const DISPOSAL_METHODS: &[(ItemCategory, &str)] = &[
    (ItemCategory::Battery, "Batteries should be disposed of at authorized battery recycling centers. Do not dispose of in regular trash. Many electronics stores or collection points offer battery recycling services."),
    (ItemCategory::Keyboard, "Keyboards can be disposed of at electronic waste recycling centers. Some manufacturers also have take-back programs to ensure proper disposal and recycling."),
    (ItemCategory::Microwave, "Microwaves should be handed over to authorized e-waste recyclers. Some cities have special collection drives or centers for large appliances."),
    (ItemCategory::Mobile, "Old mobile phones can be dropped off at mobile phone stores with e-waste recycling programs or e-waste recycling centers. Some service providers also offer trade-in or take-back options."),
    (ItemCategory::Mouse, "Mice can be taken to e-waste recycling centers. Many electronics stores also accept old computer peripherals for proper recycling."),
    (ItemCategory::Pcb, "PCBs (Printed Circuit Boards) must be handled by specialized electronic waste recycling facilities due to the hazardous materials they contain."),
    (ItemCategory::Player, "Old media players should be taken to an e-waste collection center. Many brands have take-back programs for older devices."),
    (ItemCategory::Printer, "Printers can be disposed of at e-waste recycling centers. Some manufacturers or stores also offer programs for returning old printers."),
    (ItemCategory::Television, "Old televisions, especially CRT TVs, should be handed over to certified e-waste disposal companies. Many authorized service centers offer collection services."),
    (ItemCategory::WashingMachine, "Washing machines should be disposed of through e-waste collection drives or by contacting the manufacturer for recycling programs. Authorized dealers may also offer take-back services."),
];
