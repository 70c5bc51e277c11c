//! Fixed content tables of the user guide.
//!
//! Every string here is emitted verbatim.

/// `(title, description)`
pub const TOC_ENTRIES: &[(&str, &str)] = &[
    ("1. Introduction", "Overview of Voltic platform and key capabilities"),
    ("2. Getting Started", "Account setup, workspace creation, and navigation"),
    ("3. Workspace Dashboard", "Home dashboard and activity monitoring"),
    ("4. Ad Discovery & Competitor Intelligence", "Search, filter, and analyze competitor ads"),
    ("5. Boards & Swipe Files", "Organize and manage saved ad collections"),
    ("6. AI-Powered Variations", "Generate ad variations from competitors or products"),
    ("7. Ad Generator", "Batch text overlay composition tool"),
    ("8. Assets & Product Catalog", "Manage product images and backgrounds"),
    ("9. Brand Guidelines", "Define brand voice, colors, and identity"),
    ("10. Automations", "Schedule automated reports and alerts"),
    ("11. Reports & Analytics", "Six report types for performance analysis"),
    ("12. Campaign Analysis", "Deep-dive Meta ad account analytics"),
    ("13. Creative Studio", "AI creative assistant and brainstorming"),
    ("14. Decomposition Tool", "Extract product details from ads with AI"),
    ("15. Competitors Tracking", "Monitor and track competitor brands"),
    ("16. Credits & Billing", "Manage credit balance and purchases"),
    ("17. Settings & Configuration", "Workspace and integration settings"),
    ("18. Best Practices", "Tips for maximizing Voltic features"),
    ("19. Troubleshooting", "Common issues and solutions"),
    ("20. API & Integrations", "Developer documentation and webhooks"),
];

pub const CAPABILITIES: &[(&str, &str)] = &[
    ("Competitor Intelligence", "Discover and analyze competitor ads across Meta's Ad Library"),
    ("Creative Generation", "AI-powered ad variations and text overlay composition"),
    ("Automated Reporting", "Schedule performance, competitor, and comment reports to Slack"),
    ("Product Decomposition", "Extract product information from competitor ads using AI"),
    ("Swipe File Management", "Organize and categorize saved ads in boards"),
    ("Multi-Account Analytics", "Connect up to 91+ Meta ad accounts per workspace"),
    ("AI Creative Tools", "Generate variations, compose text on images, edit product photos"),
];

pub const AUDIENCES: &[(&str, &str)] = &[
    ("Performance Marketers", "Track competitor strategies and automate reporting"),
    ("Creative Teams", "Generate ad variations at scale and build swipe files"),
    ("E-commerce Brands", "Analyze competitor product positioning and create product-based ads"),
    ("Agencies", "Manage multiple client workspaces with centralized intelligence"),
    ("Social Media Managers", "Monitor ad performance and generate platform-specific copy"),
];

pub const SIGNUP_STEPS: &[&str] = &[
    "Visit your Voltic instance URL",
    "Click 'Sign Up' on the login page",
    "Enter your email and password (minimum 6 characters)",
    "Verify your email address",
];

pub const WORKSPACE_STEPS: &[&str] = &[
    "Upon first login, you'll be prompted to create a workspace",
    "Enter workspace name (e.g., 'Acme Marketing Team')",
    "Invite team members via email (optional)",
];

pub const META_STEPS: &[&str] = &[
    "Navigate to Settings → Ad Accounts",
    "Click 'Connect Meta Account'",
    "Authenticate with Facebook/Meta",
    "Select ad accounts to sync (up to 91+ accounts)",
];

pub const NAVIGATION_ITEMS: &[(&str, &str)] = &[
    ("Home", "Workspace overview dashboard"),
    ("Automations", "Scheduled reports and alerts"),
    ("Discover", "Ad library search and competitor intelligence"),
    ("Boards", "Saved ad collections (swipe files)"),
    ("Variations", "AI-powered ad variation generator"),
    ("Ad Generator", "Text overlay composition tool (NEW)"),
    ("Assets", "Product catalog and background images"),
    ("Reports", "6 report types (Top Ads, Campaigns, Creatives, etc.)"),
    ("Campaign Analysis", "Deep-dive ad account analytics"),
    ("Creative Studio", "AI creative assistant"),
    ("Brand Guidelines", "Brand voice and visual identity"),
    ("Decomposition", "Product extraction from competitor ads"),
    ("Competitors", "Tracked competitor brands"),
    ("Credits", "AI feature credit balance"),
    ("Settings", "Workspace configuration"),
];

/// `(feature, cost)`
pub const CREDIT_COSTS: &[(&str, &str)] = &[
    ("AI Variation (per strategy)", "10 credits"),
    ("Product Decomposition", "5 credits"),
    ("AI Image Generation (DALL-E)", "15 credits"),
    ("AI Image Editing (Gemini)", "12 credits"),
    ("Creative Studio Chat Message", "3 credits"),
    ("Background Generation", "15 credits"),
];

pub const CREDIT_SOURCES: &[&str] = &[
    "• Purchase credit packs in Settings → Billing",
    "• Credits are workspace-scoped (shared by all members)",
    "• Credits never expire",
];

pub const ASSET_VARIATION_STEPS: &[&str] = &[
    "Upload your product image OR select from asset library",
    "Choose brand guideline (optional, for color palette)",
    "Set creative options (angle, lighting, background)",
    "Select strategies (Hero Product, Curiosity, Pain Point, etc.)",
    "AI edits your product image using Gemini while preserving product labels exactly",
];

/// `(channel, copy style)`
pub const CHANNELS: &[(&str, &str)] = &[
    ("Facebook", "Conversational, emoji-friendly, engagement-focused, longer storytelling"),
    ("Instagram", "Visual-first, hashtag-ready, shorter punchy copy, aspirational tone"),
    ("TikTok", "Gen-Z tone, trend-aware, ultra-short, casual and authentic"),
    ("LinkedIn", "Professional, thought-leadership tone, B2B-friendly, data-driven"),
    ("Google Ads", "Keyword-focused, direct response, respect character limits, action-oriented"),
];

/// `(name, details)`; each detail line is `Label: value`.
pub const STRATEGIES: &[(&str, &str)] = &[
    (
        "Hero Product",
        "Text: Product name in headline, feature-benefit structure\n\
         Image: Product centered, clean professional look, prominent focal point\n\
         Best For: E-commerce, product launches, clear value props",
    ),
    (
        "Curiosity",
        "Text: Pattern-interrupt headline, 'What if...' or 'The secret to...' hooks\n\
         Image: Dramatic lighting, unexpected angle, visually intriguing composition\n\
         Best For: Engagement campaigns, top-of-funnel awareness",
    ),
    (
        "Pain Point",
        "Text: Calls out specific problem, positions product as solution\n\
         Image: Visual contrast or metaphor, product appears as clear solution\n\
         Best For: Problem-aware audiences, consideration stage",
    ),
    (
        "Proof Point",
        "Text: Stats, testimonials, social proof, 'Join 10,000+ customers'\n\
         Image: Premium, trustworthy, aspirational quality, credibility cues\n\
         Best For: Conversion campaigns, overcoming objections",
    ),
    (
        "Image Only",
        "Text: Minimal or no text, product name only\n\
         Image: Stunning, eye-catching product photo, high production value\n\
         Best For: Visual platforms (Instagram), brand awareness",
    ),
    (
        "Text Only",
        "Text: Long-form copy, storytelling, detailed explanation\n\
         Image: Simple background with product, text is the hero\n\
         Best For: Complex products, educational content",
    ),
];

pub const GENERATOR_INPUTS: &[&str] = &[
    "• M backgrounds (product images, lifestyle photos, brand assets)",
    "• N text variants (headlines, ad copy, CTAs)",
];

pub const GENERATOR_BEST_FOR: &[&str] = &[
    "Creating multiple ad creatives at scale",
    "A/B testing different copy on the same visual",
    "Brand awareness campaigns with consistent visuals",
    "Social media content calendars",
];

pub const GENERATOR_NOT_FOR: &[&str] = &[
    "Complex image editing (use Variations with Gemini instead)",
    "Product photography transformation (use Asset-Based Variations)",
];

/// One step of the Ad Generator workflow.
pub struct WorkflowStep {
    pub title: &'static str,
    pub summary: Option<&'static str>,
    pub actions: &'static [&'static str],
    /// Actions are a checklist rather than an ordered list
    pub bulleted: bool,
}

pub const GUIDELINE_STEP: WorkflowStep = WorkflowStep {
    title: "Step 1: Select Brand Guideline",
    summary: Some("Links ads to your brand identity for consistent styling"),
    actions: &[
        "Click guideline dropdown",
        "Select from existing brand guidelines",
        "If none exist, create one in Brand Guidelines page first",
    ],
    bulleted: false,
};

pub const BACKGROUND_STEP: WorkflowStep = WorkflowStep {
    title: "Step 2: Select Background Images",
    summary: Some("Choose product images or brand assets to use as backgrounds"),
    actions: &[
        "Asset grid shows all images linked to selected guideline",
        "Click to select (multi-select enabled, up to 20)",
        "Selected assets show checkmark overlay",
    ],
    bulleted: false,
};

pub const TEXT_STEP: WorkflowStep = WorkflowStep {
    title: "Step 3: Enter Text Variants",
    summary: Some("Write headlines, ad copy, or CTAs to test"),
    actions: &[
        "Start with one text input field",
        "Type headline or ad copy (2-10 words works best)",
        "Click '+ Add Variant' to add more fields (up to 20)",
        "Click '×' to remove a variant",
    ],
    bulleted: false,
};

pub const TEXT_EXAMPLES: &[&str] = &[
    "\"Your Perfect Morning Starts Here ☕\"",
    "\"Limited Time: 30% Off All Coffee\"",
    "\"Voted #1 Coffee by Barista Magazine\"",
    "\"Wake Up to Better Coffee\"",
];

/// `(control, options)`
pub const STYLING_CONTROLS: &[(&str, &str)] = &[
    ("Font Family", "Inter, Roboto, Playfair Display, Montserrat, Open Sans, Lato"),
    ("Font Size", "24px - 96px (default: 48px)"),
    ("Text Color", "Color picker (hex input, default: #FFFFFF white)"),
    ("Text Position", "Center, Top, Bottom, Corners, Custom (8 presets)"),
    ("Text Effects", "Automatic drop shadow for readability"),
];

pub const PREVIEW_STEP: WorkflowStep = WorkflowStep {
    title: "Step 5: Generate Previews",
    summary: None,
    actions: &[
        "Click 'Generate Previews' button",
        "Shows count: 'Generate Previews (50)' for 5 backgrounds × 10 texts",
        "Processing happens in batches of 5",
        "Results appear in Preview Grid",
    ],
    bulleted: false,
};

pub const REVIEW_STEP: WorkflowStep = WorkflowStep {
    title: "Step 6: Review & Approve",
    summary: Some("Preview Grid shows all composited ads with:"),
    actions: &[
        "Composited ad preview image",
        "Text variant displayed",
        "Background asset name",
        "Approve/Reject buttons",
        "Download button",
    ],
    bulleted: true,
};

pub const SAVE_STEP: WorkflowStep = WorkflowStep {
    title: "Step 7: Save Approved Ads",
    summary: None,
    actions: &[
        "Click 'Save Approved (X)' button",
        "Only approved ads are saved to workspace",
        "Server creates database records with metadata",
        "Ads appear in Ads History section",
    ],
    bulleted: false,
};

/// `(category, tips)`
pub const GENERATOR_TIPS: &[(&str, &[&str])] = &[
    (
        "Background Selection",
        &[
            "Use high-resolution images (1080×1080 minimum)",
            "Ensure backgrounds have negative space for text",
            "Avoid busy/cluttered backgrounds",
            "Consistent aspect ratio (1:1 or 4:5 for social)",
        ],
    ),
    (
        "Text Variants",
        &[
            "Start with 5-10 variants for A/B testing",
            "Test different emotional tones",
            "Vary length (short punchy vs longer descriptive)",
            "Include numbers/stats ('Save 30%', 'Join 10K+')",
        ],
    ),
    (
        "Styling",
        &[
            "High contrast (white on dark or dark on light)",
            "Avoid mid-tones (gray on gray)",
            "Match font to brand personality",
            "Use larger font sizes for mobile (60px+)",
        ],
    ),
];

/// `(title, description)` of the masking pipeline, numbered on output.
pub const GEMINI_PIPELINE: &[(&str, &str)] = &[
    (
        "Generate Product Mask",
        "AI creates a segmentation mask where WHITE = product, BLACK = background",
    ),
    (
        "Apply Transformations",
        "AI edits ONLY the background (black areas) based on your creative options",
    ),
    (
        "Preserve Product Exactly",
        "Product labels, text, and packaging remain pixel-perfect",
    ),
    ("Upload to Storage", "Final image saved to Supabase Storage with public URL"),
];

/// `(option, choices)`
pub const GEMINI_OPTIONS: &[(&str, &str)] = &[
    ("Product Angle", "Front View, Side View, 3/4 View, Top-Down"),
    ("Lighting Style", "Studio, Natural, Golden Hour, Dramatic"),
    ("Background Style", "Solid White, Lifestyle, Outdoor, Gradient"),
    ("Custom Instruction", "Free-form text (e.g., \"Place on wooden shelf\")"),
    ("Brand Colors", "Pulled from Brand Guidelines (optional)"),
];

pub const GEMINI_BENEFITS: &[(&str, &str)] = &[
    ("⚡ Faster", "2-4x faster than DALL-E for image editing"),
    ("🎯 More Accurate", "Mask-based editing preserves product labels exactly"),
    ("💰 Cost-Effective", "Gemini Flash is cheaper than DALL-E 3"),
    ("🔧 Flexible", "Supports both Flash (fast) and Pro (quality) models"),
];

pub const SAVE_COMPETITOR_STEPS: &[&str] = &[
    "Find an ad from a competitor brand in Discover",
    "Click 'Save as Competitor' button (user icon)",
    "Ad metadata is saved to /competitors",
    "You can now track all ads from this brand",
];

pub const CREATE_BOARD_STEPS: &[&str] = &[
    "Search for ads (e.g., 'fitness apparel')",
    "Select 5-10 ads using checkboxes",
    "Click 'Create Board' button in toolbar",
    "Enter board name (e.g., 'Fitness Ad Swipe')",
    "Board is created with all selected ads saved",
];

/// Do's and don'ts for one feature.
pub struct Practices {
    pub feature: &'static str,
    pub dos: &'static [&'static str],
    pub donts: &'static [&'static str],
}

pub const BEST_PRACTICES: &[Practices] = &[
    Practices {
        feature: "Variation Generation",
        dos: &[
            "Start with 2-3 strategies to conserve credits",
            "Use high-quality source images (1080×1080 minimum)",
            "Write specific product descriptions for better AI output",
            "Test channel-specific copy (Facebook vs TikTok)",
            "Link assets to brand guidelines for consistency",
        ],
        donts: &[
            "Don't generate all 6 strategies at once (expensive)",
            "Don't use low-resolution competitor ad screenshots",
            "Don't skip product description (AI needs context)",
            "Don't use generic instructions ('make it better')",
        ],
    },
    Practices {
        feature: "Ad Generator",
        dos: &[
            "Test 5-10 text variants initially",
            "Use high-contrast text colors",
            "Preview on mobile viewport (most users)",
            "Select backgrounds with negative space",
            "Batch generate for efficiency",
        ],
        donts: &[
            "Don't use busy/cluttered backgrounds",
            "Don't use mid-tone text colors (poor contrast)",
            "Don't exceed 15 words per text variant",
            "Don't forget to save approved ads (lose previews on refresh)",
        ],
    },
];

/// A known problem with its cause and the steps that fix it.
pub struct Issue {
    pub title: &'static str,
    pub cause: &'static str,
    pub fixes: &'static [&'static str],
}

pub const ISSUES: &[Issue] = &[
    Issue {
        title: "Ad Account Connection Expired",
        cause: "Cause: Meta OAuth token expires after 60 days",
        fixes: &[
            "Go to Settings → Ad Accounts",
            "Click 'Refresh Token' on expired account",
            "Re-authenticate with Facebook",
            "Automations resume automatically",
        ],
    },
    Issue {
        title: "Insufficient Credits",
        cause: "Cause: Credit balance too low for operation",
        fixes: &[
            "Check credit balance in top-right corner",
            "Click 'Buy Credits' button",
            "Purchase credit pack",
            "Retry operation",
        ],
    },
    Issue {
        title: "Variation Generation Failed",
        cause: "Possible Causes: Low-quality source image, Gemini API region restriction, invalid description",
        fixes: &[
            "Check source image resolution (1080px minimum)",
            "Verify Gemini API key in environment variables",
            "Add more detailed product description",
            "Try different strategy",
        ],
    },
    Issue {
        title: "Slack Message Not Delivered",
        cause: "Possible Causes: Bot not invited, channel renamed, integration disconnected",
        fixes: &[
            "Verify Slack integration in Settings → Integrations",
            "Invite @Voltic bot to target channel (/invite @Voltic)",
            "Test with 'Run Now' on automation",
            "Check Slack workspace permissions",
        ],
    },
];

/// How one support channel is reached.
pub enum Contact {
    Text(&'static str),
    /// Display text and link target
    Link(&'static str, &'static str),
}

impl Contact {
    pub fn text(&self) -> &'static str {
        match self {
            Contact::Text(text) | Contact::Link(text, _) => text,
        }
    }
}

/// `(label, contact)`
pub const SUPPORT_CONTACTS: &[(&str, Contact)] = &[
    ("Help Center", Contact::Text("your-domain/help")),
    (
        "Email Support",
        Contact::Link("support@voltic.app", "mailto:support@voltic.app"),
    ),
    ("Live Chat", Contact::Text("Available Mon-Fri 9am-5pm EST")),
    ("Feature Requests", Contact::Text("your-domain/feedback")),
    (
        "Status Page",
        Contact::Link("status.voltic.app", "https://status.voltic.app"),
    ),
];
