//! Page and section template sources.
//!
//! One page template per business-type variant, plus the partial
//! sections appended to the business variant when the matching feature
//! id is selected. All templates extend the base document shell.

/// Templates registered with the engine environment, name to source.
pub(crate) const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", BASE),
    ("business.html", BUSINESS),
    ("portfolio.html", PORTFOLIO),
    ("ecommerce.html", ECOMMERCE),
    ("blog.html", BLOG),
    ("personal.html", PERSONAL),
    ("section_contact.html", SECTION_CONTACT),
    ("section_testimonials.html", SECTION_TESTIMONIALS),
    ("section_map.html", SECTION_MAP),
    ("section_gallery.html", SECTION_GALLERY),
    ("section_newsletter.html", SECTION_NEWSLETTER),
    ("section_booking.html", SECTION_BOOKING),
];

const BASE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ name }}</title>
  <style>{{ styles | safe }}</style>
</head>
<body>
{% block content %}{% endblock %}
</body>
</html>"##;

const BUSINESS: &str = r##"{% extends "base.html" %}

{% block content %}
<header class="site-header filled">
  <div class="container header-row">
    <div class="brand">{{ name }}</div>
    <nav>
      <a href="#">Home</a>
      <a href="#">About</a>
      <a href="#">Services</a>
      {% if show_blog_link %}<a href="#">Blog</a>
      {% endif %}<a href="#">Contact</a>
    </nav>
  </div>
</header>

<section class="section section-light">
  <div class="container hero-split">
    <div>
      <h1 class="heading">Welcome to {{ hero_name }}</h1>
      <p class="muted">{{ description }}</p>
      <p>
        <button class="btn btn-primary">Our Services</button>
        <button class="btn btn-outline">Contact Us</button>
      </p>
    </div>
    <div>
      <div class="placeholder">Business</div>
    </div>
  </div>
</section>

<section class="section">
  <div class="container">
    <h2 class="heading centered">Our Services</h2>
    <div class="grid-3">
      {% for item in range(1, 4) %}
      <div class="card">
        <div class="icon-well">{{ item }}</div>
        <h3>Service {{ item }}</h3>
        <p class="muted">Description of service {{ item }} and how it benefits your customers.</p>
      </div>
      {% endfor %}
    </div>
  </div>
</section>

{{ feature_sections | safe }}

<footer class="site-footer filled">
  <div class="container grid-4">
    <div>
      <h3>{{ name }}</h3>
      <p>{{ short_description }}</p>
    </div>
    <div>
      <h3>Quick Links</h3>
      <ul>
        <li><a href="#">Home</a></li>
        <li><a href="#">About</a></li>
        <li><a href="#">Services</a></li>
        <li><a href="#">Contact</a></li>
      </ul>
    </div>
    <div>
      <h3>Contact</h3>
      <ul>
        <li>(123) 456-7890</li>
        <li>info@example.com</li>
        <li>123 Business St, City</li>
      </ul>
    </div>
    <div>
      <h3>Follow Us</h3>
      <ul>
        <li><a href="#">Facebook</a></li>
        <li><a href="#">Twitter</a></li>
        <li><a href="#">Instagram</a></li>
        <li><a href="#">LinkedIn</a></li>
      </ul>
    </div>
  </div>
  <div class="container footer-legal">&copy; {{ name }}. All rights reserved.</div>
</footer>
{% endblock %}"##;

const PORTFOLIO: &str = r##"{% extends "base.html" %}

{% block content %}
<header class="site-header bordered">
  <div class="container header-row">
    <div class="brand accent-text">{{ name }}</div>
    <nav>
      <a href="#">Home</a>
      <a href="#">Projects</a>
      <a href="#">About</a>
      <a href="#">Contact</a>
    </nav>
  </div>
</header>

<section class="section">
  <div class="container centered">
    <div class="placeholder round">Profile</div>
    <h1 class="heading">Hi, I'm {{ first_name }}</h1>
    <p class="muted">{{ description }}</p>
    <button class="btn btn-primary btn-pill">View My Work</button>
  </div>
</section>

<section class="section section-light">
  <div class="container">
    <h2 class="heading centered">My Projects</h2>
    <div class="grid-3">
      {% for item in range(1, 7) %}
      <div class="card">
        <div class="placeholder">Project {{ item }}</div>
        <h3>Project {{ item }}</h3>
        <p class="muted">Brief description of project {{ item }} and the skills used.</p>
        <a href="#" class="accent-text">View Details &rarr;</a>
      </div>
      {% endfor %}
    </div>
  </div>
</section>

<section class="section">
  <div class="container">
    <h2 class="heading centered">My Skills</h2>
    <div class="grid-4">
      {% for skill in ["Design", "Development", "Photography", "Marketing", "UI/UX", "Branding", "Strategy", "Animation"] %}
      <div class="tile">{{ skill }}</div>
      {% endfor %}
    </div>
  </div>
</section>

<section class="section section-primary">
  <div class="container centered">
    <h2 class="heading">Let's Work Together</h2>
    <p>Interested in collaborating or have a project in mind? Get in touch and let's create something amazing together.</p>
    <button class="btn btn-inverse btn-pill">Contact Me</button>
  </div>
</section>

<footer class="site-footer plain">
  <div class="container header-row">
    <div>&copy; {{ name }}. All rights reserved.</div>
    <nav>
      <a href="#">Facebook</a>
      <a href="#">Twitter</a>
      <a href="#">Instagram</a>
      <a href="#">LinkedIn</a>
    </nav>
  </div>
</footer>
{% endblock %}"##;

const ECOMMERCE: &str = r##"{% extends "base.html" %}

{% block content %}
<header class="site-header bordered">
  <div class="container header-row">
    <div class="brand">{{ name }}</div>
    <div class="form-grid" style="flex: 1; max-width: 28rem; margin: 0 1rem;">
      <input type="text" placeholder="Search products...">
    </div>
    <nav>
      <a href="#">Account</a>
      <a href="#">Cart (3)</a>
    </nav>
  </div>
  <div class="container">
    <nav style="justify-content: center; margin-top: 1rem;">
      <a href="#">Home</a>
      <a href="#">New Arrivals</a>
      <a href="#">Women</a>
      <a href="#">Men</a>
      <a href="#">Accessories</a>
      <a href="#">Sale</a>
    </nav>
  </div>
</header>

<section class="section section-light">
  <div class="container">
    <div class="card" style="max-width: 28rem;">
      <h1 class="heading">Summer Collection</h1>
      <p class="muted">Discover our new arrivals with up to 40% off.</p>
      <button class="btn btn-primary">Shop Now</button>
    </div>
  </div>
</section>

<section class="section">
  <div class="container">
    <h2 class="heading centered">Featured Products</h2>
    <div class="grid-4">
      {% for product in [[1, "$19.99"], [2, "$39.98"], [3, "$59.97"], [4, "$79.96"]] %}
      <div class="card">
        <div class="placeholder">Product {{ product[0] }}</div>
        <h3>Product {{ product[0] }}</h3>
        <p class="muted">Category</p>
        <p>
          <strong>{{ product[1] }}</strong>
          <button class="btn btn-primary">Add to Cart</button>
        </p>
      </div>
      {% endfor %}
    </div>
  </div>
</section>

<section class="section section-light">
  <div class="container">
    <h2 class="heading centered">Shop by Category</h2>
    <div class="grid-3">
      {% for category in ["Clothing", "Shoes", "Accessories"] %}
      <div class="placeholder">
        <div class="centered">
          <h3>{{ category }}</h3>
          <button class="btn btn-inverse btn-pill">Shop Now</button>
        </div>
      </div>
      {% endfor %}
    </div>
  </div>
</section>

<section class="section section-primary">
  <div class="container centered">
    <h2 class="heading">Join Our Newsletter</h2>
    <p>Subscribe to get special offers, free giveaways, and once-in-a-lifetime deals.</p>
    <div class="newsletter-row">
      <input type="email" placeholder="Your email address">
      <button class="btn btn-inverse">Subscribe</button>
    </div>
  </div>
</section>

<footer class="site-footer plain">
  <div class="container grid-4">
    <div>
      <h3>{{ name }}</h3>
      <p>{{ short_description }}</p>
    </div>
    <div>
      <h3>Shop</h3>
      <ul>
        <li><a href="#">New Arrivals</a></li>
        <li><a href="#">Best Sellers</a></li>
        <li><a href="#">Sale</a></li>
        <li><a href="#">All Products</a></li>
      </ul>
    </div>
    <div>
      <h3>Customer Service</h3>
      <ul>
        <li><a href="#">Contact Us</a></li>
        <li><a href="#">Shipping &amp; Returns</a></li>
        <li><a href="#">FAQ</a></li>
        <li><a href="#">Track Order</a></li>
      </ul>
    </div>
    <div>
      <h3>Follow Us</h3>
      <ul>
        <li><a href="#">Facebook</a></li>
        <li><a href="#">Twitter</a></li>
        <li><a href="#">Instagram</a></li>
      </ul>
      <p>We accept all major credit cards and PayPal.</p>
    </div>
  </div>
  <div class="container footer-legal">&copy; {{ name }}. All rights reserved.</div>
</footer>
{% endblock %}"##;

const BLOG: &str = r##"{% extends "base.html" %}

{% block content %}
<header class="site-header bordered">
  <div class="container header-row">
    <div class="brand">{{ name }}</div>
    <nav>
      <a href="#">Home</a>
      <a href="#">Categories</a>
      <a href="#">About</a>
      <a href="#">Contact</a>
    </nav>
  </div>
</header>

<section class="section">
  <div class="container">
    <div class="card hero-split">
      <div class="placeholder">Featured Post</div>
      <div>
        <span class="chip">Featured</span>
        <h1 class="heading">The Ultimate Guide to Something Amazing</h1>
        <p class="muted">Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation.</p>
        <p class="muted">John Doe &middot; May 15, 2023 &middot; 10 min read</p>
        <button class="btn btn-primary btn-pill">Read More</button>
      </div>
    </div>
  </div>
</section>

<section class="section section-light">
  <div class="container">
    <h2 class="heading">Recent Posts</h2>
    <div class="grid-3">
      {% for item in range(1, 7) %}
      <div class="card">
        <div class="placeholder">Post {{ item }}</div>
        <span class="chip">Category</span>
        <h3>Blog Post Title {{ item }}</h3>
        <p class="muted">Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore.</p>
        <p class="muted">May {{ item + 10 }}, 2023 &mdash; <a href="#" class="accent-text">Read More &rarr;</a></p>
      </div>
      {% endfor %}
    </div>
  </div>
</section>

<section class="section">
  <div class="container">
    <h2 class="heading centered">Popular Categories</h2>
    <div class="grid-4">
      {% for category in ["Technology", "Lifestyle", "Travel", "Food", "Health", "Business", "Art", "Science"] %}
      <a href="#" class="tile">{{ category }}</a>
      {% endfor %}
    </div>
  </div>
</section>

<section class="section section-primary">
  <div class="container centered">
    <h2 class="heading">Subscribe to Our Newsletter</h2>
    <p>Get the latest posts delivered right to your inbox.</p>
    <div class="newsletter-row">
      <input type="email" placeholder="Your email address">
      <button class="btn btn-inverse">Subscribe</button>
    </div>
  </div>
</section>

<footer class="site-footer plain">
  <div class="container grid-3">
    <div>
      <h3>{{ name }}</h3>
      <p>{{ short_description }}</p>
    </div>
    <div>
      <h3>Explore</h3>
      <ul>
        <li><a href="#">Home</a></li>
        <li><a href="#">Categories</a></li>
        <li><a href="#">Popular Posts</a></li>
        <li><a href="#">About</a></li>
      </ul>
    </div>
    <div>
      <h3>Follow Us</h3>
      <ul>
        <li><a href="#">Facebook</a></li>
        <li><a href="#">Twitter</a></li>
        <li><a href="#">Instagram</a></li>
      </ul>
    </div>
  </div>
  <div class="container footer-legal">&copy; {{ name }}. All rights reserved.</div>
</footer>
{% endblock %}"##;

const PERSONAL: &str = r##"{% extends "base.html" %}

{% block content %}
<header class="site-header">
  <div class="container header-row">
    <div class="brand">{{ name }}</div>
    <nav>
      <a href="#" class="accent-text">Home</a>
      <a href="#" class="accent-text">About</a>
      <a href="#" class="accent-text">Blog</a>
      <a href="#" class="accent-text">Contact</a>
    </nav>
  </div>
</header>

<section class="section section-light">
  <div class="container hero-split">
    <div>
      <h1 class="heading">Hello, I'm {{ first_name }}</h1>
      <p class="muted">{{ description }}</p>
      <p>
        <button class="btn btn-primary btn-pill">About Me</button>
        <button class="btn btn-outline btn-pill">Contact</button>
      </p>
    </div>
    <div>
      <div class="placeholder round">Profile</div>
    </div>
  </div>
</section>

<section class="section">
  <div class="container">
    <h2 class="heading centered">About Me</h2>
    <p class="muted">Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.</p>
    <p class="muted">Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.</p>
    <div class="grid-3">
      <div class="card centered">
        <h3>My Interests</h3>
        <p class="muted">Photography, Travel, Reading, Cooking</p>
      </div>
      <div class="card centered">
        <h3>My Education</h3>
        <p class="muted">Bachelor's in Something, University Name</p>
      </div>
      <div class="card centered">
        <h3>My Experience</h3>
        <p class="muted">5+ years in Something Interesting</p>
      </div>
    </div>
  </div>
</section>

<section class="section section-light">
  <div class="container">
    <h2 class="heading centered">Recent Blog Posts</h2>
    <div class="grid-3">
      {% for item in range(1, 4) %}
      <div class="card">
        <div class="placeholder">Post {{ item }}</div>
        <h3>My Adventure {{ item }}</h3>
        <p class="muted">Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore.</p>
        <p class="muted">May {{ item + 10 }}, 2023 &mdash; <a href="#" class="accent-text">Read More &rarr;</a></p>
      </div>
      {% endfor %}
    </div>
    <div class="centered" style="margin-top: 2rem;">
      <button class="btn btn-primary btn-pill">View All Posts</button>
    </div>
  </div>
</section>

<section class="section">
  <div class="container">
    <h2 class="heading centered">Get In Touch</h2>
    <div style="max-width: 28rem; margin: 0 auto;">
      <div class="form-grid">
        <input type="text" placeholder="Your Name">
        <input type="email" placeholder="Your Email">
        <textarea placeholder="Your Message" rows="4"></textarea>
      </div>
      <button class="btn btn-primary" style="width: 100%;">Send Message</button>
    </div>
  </div>
</section>

<footer class="site-footer filled">
  <div class="container centered">
    <nav style="justify-content: center; margin-bottom: 1rem;">
      <a href="#">Facebook</a>
      <a href="#">Twitter</a>
      <a href="#">Instagram</a>
      <a href="#">LinkedIn</a>
    </nav>
    <div>&copy; {{ name }}. All rights reserved.</div>
  </div>
</footer>
{% endblock %}"##;

const SECTION_CONTACT: &str = r##"<section class="section section-light">
  <div class="container">
    <h2 class="heading centered">Contact Us</h2>
    <div style="max-width: 32rem; margin: 0 auto;">
      <div class="form-grid">
        <input type="text" placeholder="Your Name">
        <input type="email" placeholder="Your Email">
        <textarea placeholder="Your Message" rows="4"></textarea>
      </div>
      <button class="btn btn-primary" style="width: 100%;">Send Message</button>
    </div>
  </div>
</section>"##;

const SECTION_TESTIMONIALS: &str = r##"<section class="section">
  <div class="container">
    <h2 class="heading centered">What Our Clients Say</h2>
    <div class="grid-3">
      {% for item in range(1, 4) %}
      <div class="card">
        <h3>Client Name {{ item }}</h3>
        <p class="muted">Position, Company</p>
        <p class="muted">"Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua."</p>
      </div>
      {% endfor %}
    </div>
  </div>
</section>"##;

const SECTION_MAP: &str = r##"<section class="section">
  <div class="container">
    <h2 class="heading centered">Find Us</h2>
    <div class="placeholder" style="height: 16rem;">Map placeholder</div>
    <p class="muted centered" style="margin-top: 1.5rem;">123 Business Street, City, Country</p>
  </div>
</section>"##;

const SECTION_GALLERY: &str = r##"<section class="section section-light">
  <div class="container">
    <h2 class="heading centered">Gallery</h2>
    <div class="grid-4">
      {% for item in range(1, 9) %}
      <div class="placeholder">Image {{ item }}</div>
      {% endfor %}
    </div>
  </div>
</section>"##;

const SECTION_NEWSLETTER: &str = r##"<section class="section section-primary">
  <div class="container centered">
    <h2 class="heading">Subscribe to Our Newsletter</h2>
    <p>Stay updated with our latest news and offers.</p>
    <div class="newsletter-row">
      <input type="email" placeholder="Your email address">
      <button class="btn btn-inverse">Subscribe</button>
    </div>
  </div>
</section>"##;

const SECTION_BOOKING: &str = r##"<section class="section">
  <div class="container">
    <h2 class="heading centered">Book an Appointment</h2>
    <div style="max-width: 32rem; margin: 0 auto;">
      <div class="form-grid">
        <input type="text" placeholder="Your Name">
        <input type="email" placeholder="Your Email">
        <input type="tel" placeholder="Your Phone">
        <input type="date">
        <select>
          <option value="">Select Time</option>
          <option value="9:00">9:00 AM</option>
          <option value="10:00">10:00 AM</option>
          <option value="11:00">11:00 AM</option>
          <option value="12:00">12:00 PM</option>
          <option value="13:00">1:00 PM</option>
          <option value="14:00">2:00 PM</option>
          <option value="15:00">3:00 PM</option>
          <option value="16:00">4:00 PM</option>
        </select>
      </div>
      <button class="btn btn-primary" style="width: 100%;">Book Now</button>
    </div>
  </div>
</section>"##;
