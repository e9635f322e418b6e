//! Indian states and union territories served by the storefront.
//!
//! Distance classes are measured from Kota, Rajasthan.

use crate::pricing::DeliveryZone;
use DeliveryZone::{Far, Local, Medium, Nearby};

/// `(name, code, zone)` for every state and union territory
pub(super) const STATES: &[(&str, &str, DeliveryZone)] = &[
    ("Andhra Pradesh", "AP", Far),
    ("Arunachal Pradesh", "AR", Far),
    ("Assam", "AS", Far),
    ("Bihar", "BR", Medium),
    ("Chhattisgarh", "CG", Medium),
    ("Goa", "GA", Far),
    ("Gujarat", "GJ", Nearby),
    ("Haryana", "HR", Nearby),
    ("Himachal Pradesh", "HP", Medium),
    ("Jharkhand", "JH", Medium),
    ("Karnataka", "KA", Far),
    ("Kerala", "KL", Far),
    ("Madhya Pradesh", "MP", Nearby),
    ("Maharashtra", "MH", Medium),
    ("Manipur", "MN", Far),
    ("Meghalaya", "ML", Far),
    ("Mizoram", "MZ", Far),
    ("Nagaland", "NL", Far),
    ("Odisha", "OD", Far),
    ("Punjab", "PB", Nearby),
    ("Rajasthan", "RJ", Local),
    ("Sikkim", "SK", Far),
    ("Tamil Nadu", "TN", Far),
    ("Telangana", "TS", Far),
    ("Tripura", "TR", Far),
    ("Uttar Pradesh", "UP", Nearby),
    ("Uttarakhand", "UK", Nearby),
    ("West Bengal", "WB", Medium),
    // Union Territories
    ("Andaman and Nicobar Islands", "AN", Far),
    ("Chandigarh", "CH", Nearby),
    ("Dadra and Nagar Haveli and Daman and Diu", "DD", Far),
    ("Delhi", "DL", Nearby),
    ("Jammu and Kashmir", "JK", Medium),
    ("Ladakh", "LA", Medium),
    ("Lakshadweep", "LD", Far),
    ("Puducherry", "PY", Far),
];

/// Major cities offered in the checkout form, keyed by state code
pub(super) const CITIES: &[(&str, &[&str])] = &[
    ("AP", &["Visakhapatnam", "Vijayawada", "Guntur", "Nellore", "Kurnool", "Tirupati", "Kadapa", "Rajahmundry", "Kakinada", "Anantapur"]),
    ("AR", &["Itanagar", "Naharlagun", "Pasighat", "Tawang", "Ziro", "Bomdila", "Along", "Tezu", "Changlang"]),
    ("AS", &["Guwahati", "Silchar", "Dibrugarh", "Jorhat", "Nagaon", "Tinsukia", "Tezpur", "Bongaigaon", "Karimganj"]),
    ("BR", &["Patna", "Gaya", "Bhagalpur", "Muzaffarpur", "Purnia", "Darbhanga", "Bihar Sharif", "Arrah", "Begusarai"]),
    ("CG", &["Raipur", "Bhilai", "Bilaspur", "Korba", "Durg", "Rajnandgaon", "Raigarh", "Jagdalpur", "Ambikapur"]),
    ("GA", &["Panaji", "Margao", "Vasco da Gama", "Mapusa", "Ponda", "Bicholim", "Curchorem", "Sanquelim"]),
    ("GJ", &["Ahmedabad", "Surat", "Vadodara", "Rajkot", "Bhavnagar", "Jamnagar", "Junagadh", "Gandhinagar", "Anand", "Nadiad"]),
    ("HR", &["Faridabad", "Gurugram", "Panipat", "Ambala", "Yamunanagar", "Rohtak", "Hisar", "Karnal", "Sonipat", "Panchkula"]),
    ("HP", &["Shimla", "Dharamshala", "Solan", "Mandi", "Palampur", "Baddi", "Nahan", "Bilaspur", "Hamirpur", "Una"]),
    ("JH", &["Ranchi", "Jamshedpur", "Dhanbad", "Bokaro", "Deoghar", "Hazaribagh", "Giridih", "Ramgarh", "Phusro"]),
    ("KA", &["Bengaluru", "Mysuru", "Hubballi", "Mangaluru", "Belagavi", "Kalaburagi", "Davangere", "Ballari", "Vijayapura", "Shivamogga"]),
    ("KL", &["Thiruvananthapuram", "Kochi", "Kozhikode", "Thrissur", "Kollam", "Palakkad", "Alappuzha", "Kannur", "Kottayam", "Malappuram"]),
    ("MP", &["Bhopal", "Indore", "Jabalpur", "Gwalior", "Ujjain", "Sagar", "Dewas", "Satna", "Ratlam", "Rewa"]),
    ("MH", &["Mumbai", "Pune", "Nagpur", "Thane", "Nashik", "Aurangabad", "Solapur", "Kolhapur", "Sangli", "Amravati"]),
    ("MN", &["Imphal", "Thoubal", "Bishnupur", "Churachandpur", "Ukhrul", "Senapati", "Tamenglong", "Chandel"]),
    ("ML", &["Shillong", "Tura", "Jowai", "Nongstoin", "Williamnagar", "Baghmara", "Resubelpara", "Mairang"]),
    ("MZ", &["Aizawl", "Lunglei", "Champhai", "Serchhip", "Kolasib", "Lawngtlai", "Mamit", "Saiha"]),
    ("NL", &["Kohima", "Dimapur", "Mokokchung", "Tuensang", "Wokha", "Zunheboto", "Mon", "Phek"]),
    ("OD", &["Bhubaneswar", "Cuttack", "Rourkela", "Berhampur", "Sambalpur", "Puri", "Balasore", "Bhadrak", "Baripada"]),
    ("PB", &["Ludhiana", "Amritsar", "Jalandhar", "Patiala", "Bathinda", "Mohali", "Pathankot", "Hoshiarpur", "Batala", "Moga"]),
    ("RJ", &["Jaipur", "Jodhpur", "Kota", "Bikaner", "Ajmer", "Udaipur", "Bhilwara", "Alwar", "Bharatpur", "Sikar", "Sri Ganganagar", "Pali"]),
    ("SK", &["Gangtok", "Namchi", "Gyalshing", "Mangan", "Rangpo", "Singtam", "Jorethang"]),
    ("TN", &["Chennai", "Coimbatore", "Madurai", "Tiruchirappalli", "Salem", "Tirunelveli", "Tiruppur", "Vellore", "Erode", "Thoothukudi"]),
    ("TS", &["Hyderabad", "Warangal", "Nizamabad", "Karimnagar", "Khammam", "Ramagundam", "Mahbubnagar", "Nalgonda", "Adilabad"]),
    ("TR", &["Agartala", "Udaipur", "Dharmanagar", "Kailasahar", "Belonia", "Khowai", "Ambassa", "Sabroom"]),
    ("UP", &["Lucknow", "Kanpur", "Agra", "Varanasi", "Prayagraj", "Meerut", "Noida", "Ghaziabad", "Bareilly", "Aligarh", "Moradabad", "Gorakhpur"]),
    ("UK", &["Dehradun", "Haridwar", "Roorkee", "Haldwani", "Rudrapur", "Kashipur", "Rishikesh", "Kotdwar", "Pithoragarh", "Nainital"]),
    ("WB", &["Kolkata", "Howrah", "Asansol", "Siliguri", "Durgapur", "Bardhaman", "Malda", "Baharampur", "Kharagpur", "Haldia"]),
    ("AN", &["Port Blair", "Garacharma", "Bamboo Flat", "Prothrapur", "Rangat"]),
    ("CH", &["Chandigarh"]),
    ("DD", &["Daman", "Diu", "Silvassa", "Amli", "Khanvel"]),
    ("DL", &["New Delhi", "Delhi", "Dwarka", "Rohini", "Saket", "Karol Bagh", "Pitampura", "Janakpuri", "Laxmi Nagar", "Shahdara"]),
    ("JK", &["Srinagar", "Jammu", "Anantnag", "Baramulla", "Sopore", "Udhampur", "Kathua", "Poonch", "Rajouri"]),
    ("LA", &["Leh", "Kargil", "Diskit", "Padum"]),
    ("LD", &["Kavaratti", "Agatti", "Minicoy", "Andrott", "Amini"]),
    ("PY", &["Puducherry", "Karaikal", "Mahe", "Yanam"]),
];
