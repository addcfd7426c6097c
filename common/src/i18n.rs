//! Hand-written UI strings.
//!
//! Screen labels exist in Hindi and English only; every other language sees
//! the English set. Welcome banners exist for four languages and fall back
//! to Hindi. Both policies are spelled out as exhaustive matches.

use crate::language::Language;

/// Labels used across the three screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub ask_price_title: &'static str,
    pub ask_price_hint: &'static str,
    pub try_demo_query: &'static str,
    pub demo_without_voice: &'static str,
    pub demo_query: &'static str,
    pub example_title: &'static str,
    pub example_suggested: &'static str,
    pub example_reason: &'static str,
    pub example_hint: &'static str,
    pub select_commodity: &'static str,
    pub or_select_commodity: &'static str,
    pub todays_price: &'static str,
    pub start_negotiation: &'static str,
    pub view_all_prices: &'static str,
    pub dashboard_title: &'static str,
    pub todays_summary: &'static str,
    pub price_up: &'static str,
    pub price_down: &'static str,
    pub main_prices: &'static str,
    pub recent_activity: &'static str,
    pub activity_negotiation_done: &'static str,
    pub activity_checked_onion: &'static str,
    pub activity_prices_updated: &'static str,
    pub quick_ask_price: &'static str,
    pub quick_negotiate: &'static str,
    pub data_source: &'static str,
    pub status_online: &'static str,
    pub status_offline: &'static str,
    pub forecast_title: &'static str,
    pub forecast_outlook: &'static str,
    pub forecast_basis: &'static str,
    pub forecast_disclaimer: &'static str,
    pub receipt_title: &'static str,
    pub receipt_footer: &'static str,
    pub network_title: &'static str,
    pub network_footer: &'static str,
    pub empowerment_title: &'static str,
    pub empowerment_fair_pricing: &'static str,
    pub empowerment_language: &'static str,
    pub empowerment_offline: &'static str,
    pub vision_title: &'static str,
    pub vision_subtitle: &'static str,
    pub vision_fair_trade: &'static str,
    pub vision_fair_trade_detail: &'static str,
    pub vision_multilingual: &'static str,
    pub vision_multilingual_detail: &'static str,
    pub vision_every_vendor: &'static str,
    pub vision_every_vendor_detail: &'static str,
    pub preview_title: &'static str,
    pub preview_subtitle: &'static str,
}

const HINDI: Labels = Labels {
    ask_price_title: "आज का भाव पूछें",
    ask_price_hint: "माइक दबाकर फसल का नाम बोलें",
    try_demo_query: "डेमो क्वेरी आज़माएं",
    demo_without_voice: "बिना आवाज़ के डेमो देखें",
    demo_query: "टमाटर का भाव क्या है",
    example_title: "उदाहरण: टमाटर",
    example_suggested: "सुझाया गया विक्रय मूल्य",
    example_reason: "कारण: पास की मंडी औसत",
    example_hint: "ऊपर \"डेमो क्वेरी आज़माएं\" दबाएं या नीचे से अन्य फसल चुनें",
    select_commodity: "फसल चुनें",
    or_select_commodity: "या फसल चुनें:",
    todays_price: "आज का भाव:",
    start_negotiation: "बातचीत शुरू करें",
    view_all_prices: "सभी भाव देखें",
    dashboard_title: "मंडी डैशबोर्ड",
    todays_summary: "आज का सारांश",
    price_up: "बढ़ते भाव",
    price_down: "गिरते भाव",
    main_prices: "मुख्य फसलों के भाव",
    recent_activity: "हाल की गतिविधि",
    activity_negotiation_done: "टमाटर बातचीत पूरी",
    activity_checked_onion: "प्याज का भाव चेक किया",
    activity_prices_updated: "भाव अपडेट हुआ",
    quick_ask_price: "भाव पूछें",
    quick_negotiate: "बातचीत",
    data_source: "डेटा स्रोत: मॉक एग्मार्कनेट",
    status_online: "ऑनलाइन - लाइव डेटा",
    status_offline: "ऑफलाइन - कल का डेटा",
    forecast_title: "AI मूल्य पूर्वानुमान",
    forecast_outlook: "7-दिन का दृष्टिकोण",
    forecast_basis: "AI विश्लेषण: मौसम + मांग पैटर्न आधारित",
    forecast_disclaimer: "पूर्वानुमान सलाहकारी है, ऐतिहासिक + मांग पैटर्न पर आधारित।",
    receipt_title: "सत्यापित डिजिटल व्यापार रसीद",
    receipt_footer: "पारदर्शी व्यापार रिकॉर्ड",
    network_title: "जुड़ा हुआ भारत मंडी नेटवर्क",
    network_footer: "एकीकृत राष्ट्रीय व्यापार नेटवर्क",
    empowerment_title: "विक्रेता सशक्तिकरण सूचकांक",
    empowerment_fair_pricing: "निष्पक्ष मूल्य पहुंच",
    empowerment_language: "भाषा समानता",
    empowerment_offline: "ऑफलाइन सुरक्षा",
    vision_title: "भारत का AI व्यापार अवसंरचना 2048",
    vision_subtitle: "आज के स्थानीय मंडियों से शुरुआत",
    vision_fair_trade: "निष्पक्ष व्यापार का भविष्य",
    vision_fair_trade_detail: "हर किसान के लिए पारदर्शी मूल्य निर्धारण",
    vision_multilingual: "बहुभाषी वाणिज्य",
    vision_multilingual_detail: "हर भाषा में व्यापार की सुविधा",
    vision_every_vendor: "हर विक्रेता के लिए",
    vision_every_vendor_detail: "कश्मीर से कन्याकुमारी तक",
    preview_title: "2048 पूर्वावलोकन सुविधाएं",
    preview_subtitle: "भविष्य की व्यापार तकनीक का अनुभव करें",
};

const ENGLISH: Labels = Labels {
    ask_price_title: "Ask Today's Price",
    ask_price_hint: "Press mic and speak commodity name",
    try_demo_query: "Try Demo Query",
    demo_without_voice: "Demo without voice input",
    demo_query: "What is tomato price",
    example_title: "Example: Tomato",
    example_suggested: "Suggested selling price",
    example_reason: "Reason: Nearby mandi avg",
    example_hint: "Press \"Try Demo Query\" above or select other commodity below",
    select_commodity: "Select Commodity",
    or_select_commodity: "Or select commodity:",
    todays_price: "Today's Price:",
    start_negotiation: "Start Negotiation",
    view_all_prices: "View All Prices",
    dashboard_title: "Mandi Dashboard",
    todays_summary: "Today's Summary",
    price_up: "Price Up",
    price_down: "Price Down",
    main_prices: "Main Commodity Prices",
    recent_activity: "Recent Activity",
    activity_negotiation_done: "Tomato negotiation completed",
    activity_checked_onion: "Checked onion price",
    activity_prices_updated: "Price data updated",
    quick_ask_price: "Ask Price",
    quick_negotiate: "Negotiate",
    data_source: "Data Source: Mock Agmarknet",
    status_online: "Online - Live Data",
    status_offline: "Offline - Yesterday's Data",
    forecast_title: "AI Price Forecast",
    forecast_outlook: "7-Day Outlook",
    forecast_basis: "AI Analysis: Weather + demand pattern based",
    forecast_disclaimer: "Forecast is advisory, based on historical + demand patterns.",
    receipt_title: "Verified Digital Trade Receipt",
    receipt_footer: "Transparent trade record",
    network_title: "Connected Bharat Mandi Network",
    network_footer: "Unified national trade network",
    empowerment_title: "Vendor Empowerment Index",
    empowerment_fair_pricing: "Fair pricing access",
    empowerment_language: "Language equality",
    empowerment_offline: "Offline safety",
    vision_title: "Bharat's AI Trade Infrastructure for 2048",
    vision_subtitle: "Starting from local mandis today",
    vision_fair_trade: "Future of Fair Trade",
    vision_fair_trade_detail: "Transparent pricing for every farmer",
    vision_multilingual: "Multilingual Commerce",
    vision_multilingual_detail: "Trade facilitation in every language",
    vision_every_vendor: "For Every Vendor",
    vision_every_vendor_detail: "From Kashmir to Kanyakumari",
    preview_title: "2048 Preview Features",
    preview_subtitle: "Experience future trade technology",
};

pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::Hindi => &HINDI,
        Language::English
        | Language::Tamil
        | Language::Telugu
        | Language::Bengali
        | Language::Gujarati
        | Language::Marathi
        | Language::Punjabi
        | Language::Bhojpuri => &ENGLISH,
    }
}

/// Greeting banner at the top of the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Welcome {
    pub greeting: &'static str,
    pub message: &'static str,
    /// (emoji, caption) pairs.
    pub values: [(&'static str, &'static str); 3],
}

const WELCOME_HINDI: Welcome = Welcome {
    greeting: "नमस्ते! यह आपका Mandi Saathi है।",
    message: "आज का सही भाव जानिए और आत्मविश्वास से व्यापार करिए।",
    values: [("💪", "आपकी मेहनत"), ("🤝", "सही भाव"), ("✨", "बेहतर कल")],
};

const WELCOME_ENGLISH: Welcome = Welcome {
    greeting: "Welcome! This is your Mandi Saathi.",
    message: "Know today's fair prices and trade with confidence.",
    values: [("💪", "Your Hard Work"), ("🤝", "Fair Price"), ("✨", "Better Tomorrow")],
};

const WELCOME_TAMIL: Welcome = Welcome {
    greeting: "வணக்கம்! இது உங்கள் Mandi Saathi.",
    message: "இன்றைய நியாயமான விலையை அறிந்து நம்பிக்கையுடன் வர்த்தகம் செய்யுங்கள்.",
    values: [("💪", "உங்கள் உழைப்பு"), ("🤝", "நியாய விலை"), ("✨", "சிறந்த நாளை")],
};

const WELCOME_BHOJPURI: Welcome = Welcome {
    greeting: "नमस्कार! ई आपके Mandi Saathi बा।",
    message: "आज के सही भाव जानीं आ भरोसा से व्यापार करीं।",
    values: [("💪", "आपके मेहनत"), ("🤝", "सही भाव"), ("✨", "बेहतर कल")],
};

pub fn welcome(language: Language) -> &'static Welcome {
    match language {
        Language::English => &WELCOME_ENGLISH,
        Language::Tamil => &WELCOME_TAMIL,
        Language::Bhojpuri => &WELCOME_BHOJPURI,
        Language::Hindi
        | Language::Telugu
        | Language::Bengali
        | Language::Gujarati
        | Language::Marathi
        | Language::Punjabi => &WELCOME_HINDI,
    }
}

/// Offline banner; deliberately Hinglish plus Hindi whatever the language.
pub const OFFLINE_BANNER: &str = "Network kamzor hai. Cached prices dikh rahe hain.";
pub const OFFLINE_BANNER_DETAIL: &str = "ऑफलाइन मोड - कल का डेटा दिख रहा है";
