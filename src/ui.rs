use crate::models::AppState;

pub fn render_index(state: &AppState) -> String {
    let first_name = state
        .user
        .name
        .split_whitespace()
        .next()
        .unwrap_or("there")
        .to_string();

    INDEX_HTML
        .replace("{{FIRST_NAME}}", &first_name)
        .replace("{{INITIALS}}", &state.user.initials)
        .replace("{{STREAK}}", &state.user.streak_days.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Life Hack OS</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #10131a;
      --bg-2: #1d2433;
      --ink: #e7e9ee;
      --muted: #8b93a7;
      --accent: #4ade80;
      --accent-2: #60a5fa;
      --warn: #fbbf24;
      --bad: #f87171;
      --card: rgba(30, 37, 52, 0.92);
      --shadow: 0 24px 60px rgba(4, 8, 18, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(160deg, var(--bg-1), #141927 60%, #10131a 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      align-items: center;
      gap: 14px;
    }

    .avatar-circle {
      width: 48px;
      height: 48px;
      border-radius: 50%;
      background: linear-gradient(135deg, var(--accent-2), var(--accent));
      color: #0c101a;
      display: grid;
      place-items: center;
      font-weight: 600;
      font-size: 1.2rem;
    }

    .greeting {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.4rem, 3vw, 1.9rem);
      margin: 0;
    }

    .streak {
      margin: 0;
      color: var(--muted);
      font-size: 0.9rem;
    }

    nav {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(96, 165, 250, 0.08);
      border-radius: 999px;
    }

    .nav-item {
      flex: 1;
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 10px 0;
      font-size: 0.95rem;
      font-weight: 600;
      color: var(--muted);
      cursor: pointer;
      transition: background 150ms ease, color 150ms ease;
    }

    .nav-item-active {
      background: rgba(96, 165, 250, 0.2);
      color: var(--ink);
    }

    .screen {
      display: none;
      gap: 16px;
    }

    .screen-active {
      display: grid;
    }

    .card {
      background: rgba(16, 20, 30, 0.6);
      border: 1px solid rgba(96, 165, 250, 0.1);
      border-radius: 18px;
      padding: 18px;
      display: grid;
      gap: 10px;
    }

    .card h2 {
      margin: 0;
      font-size: 1.05rem;
    }

    .card-sub {
      margin: 0;
      color: var(--muted);
      font-size: 0.9rem;
    }

    .score {
      font-size: 2.6rem;
      font-weight: 600;
      color: var(--accent);
    }

    .pill-row {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .pill {
      border-radius: 999px;
      border: 1px solid rgba(139, 147, 167, 0.4);
      background: transparent;
      color: var(--ink);
      padding: 6px 14px;
      font-size: 0.85rem;
      cursor: default;
    }

    .pill-on {
      border-color: var(--accent);
      color: var(--accent);
    }

    .pill-toggle {
      cursor: pointer;
    }

    .tabs {
      display: flex;
      gap: 6px;
    }

    .tab {
      background: transparent;
      border: 1px solid rgba(139, 147, 167, 0.3);
      border-radius: 999px;
      padding: 6px 14px;
      font-size: 0.85rem;
      font-weight: 600;
      color: var(--muted);
      cursor: pointer;
    }

    .tab-active {
      border-color: var(--accent-2);
      color: var(--accent-2);
    }

    .tab-content {
      display: none;
    }

    .tab-content-active {
      display: grid;
      gap: 12px;
    }

    .meter {
      display: grid;
      gap: 6px;
    }

    .meter-track {
      height: 8px;
      border-radius: 999px;
      background: rgba(139, 147, 167, 0.2);
      overflow: hidden;
    }

    .meter-fill {
      height: 100%;
      border-radius: 999px;
      background: var(--accent);
      transition: width 300ms ease;
    }

    .meter-fill.over {
      background: var(--bad);
    }

    .meter-label {
      display: flex;
      justify-content: space-between;
      font-size: 0.85rem;
      color: var(--muted);
    }

    .list {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 8px;
    }

    .list li {
      display: flex;
      justify-content: space-between;
      gap: 12px;
      padding: 8px 0;
      border-bottom: 1px solid rgba(139, 147, 167, 0.12);
      font-size: 0.92rem;
    }

    .list-sub {
      color: var(--muted);
    }

    .money-value {
      font-size: 2rem;
      font-weight: 600;
    }

    .money-diff {
      font-weight: 600;
      color: var(--accent);
    }

    .money-diff-bad {
      color: var(--bad);
    }

    .chip {
      border-radius: 999px;
      border: 1px solid rgba(96, 165, 250, 0.4);
      background: transparent;
      color: var(--accent-2);
      padding: 6px 14px;
      font-size: 0.85rem;
      font-weight: 600;
      cursor: pointer;
    }

    .chip-active {
      background: rgba(96, 165, 250, 0.2);
      color: var(--ink);
    }

    button.btn-primary {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: #0c101a;
      transition: transform 150ms ease;
    }

    button.btn-primary:active {
      transform: scale(0.98);
    }

    input, select {
      background: rgba(16, 20, 30, 0.8);
      border: 1px solid rgba(139, 147, 167, 0.3);
      border-radius: 12px;
      color: var(--ink);
      padding: 10px 12px;
      font-size: 0.92rem;
      font-family: inherit;
    }

    form.inline {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
      align-items: center;
    }

    .status {
      min-height: 1.2em;
      font-size: 0.85rem;
    }

    .status.error { color: var(--bad); }
    .status.ok { color: var(--accent); }

    /* Ask AI */
    .ask-ai-fab {
      position: fixed;
      right: 22px;
      bottom: 22px;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-weight: 600;
      font-size: 0.95rem;
      background: var(--accent-2);
      color: #0c101a;
      cursor: pointer;
      box-shadow: 0 14px 30px rgba(96, 165, 250, 0.35);
    }

    .ask-ai-panel {
      position: fixed;
      right: 22px;
      bottom: 84px;
      width: min(360px, calc(100vw - 44px));
      max-height: 70vh;
      background: var(--card);
      border: 1px solid rgba(96, 165, 250, 0.2);
      border-radius: 18px;
      box-shadow: var(--shadow);
      display: none;
      grid-template-rows: auto 1fr auto auto;
      overflow: hidden;
    }

    .ask-ai-open {
      display: grid;
    }

    .ask-ai-header {
      display: flex;
      justify-content: space-between;
      align-items: center;
      padding: 12px 16px;
      border-bottom: 1px solid rgba(139, 147, 167, 0.15);
    }

    .ask-ai-header button {
      background: transparent;
      border: none;
      color: var(--muted);
      font-size: 1.1rem;
      cursor: pointer;
    }

    .ask-ai-messages {
      overflow-y: auto;
      padding: 12px 16px;
      display: grid;
      gap: 10px;
      max-height: 40vh;
    }

    .msg {
      border-radius: 14px;
      padding: 10px 12px;
      font-size: 0.9rem;
      line-height: 1.4;
    }

    .msg p { margin: 0 0 6px; }
    .msg p:last-child { margin-bottom: 0; }
    .msg ul { margin: 4px 0; padding-left: 18px; }

    .msg-ai {
      background: rgba(96, 165, 250, 0.12);
      justify-self: start;
    }

    .msg-user {
      background: rgba(74, 222, 128, 0.12);
      justify-self: end;
    }

    .ask-ai-compose {
      display: flex;
      gap: 8px;
      padding: 10px 16px;
    }

    .ask-ai-compose input {
      flex: 1;
    }

    .ask-ai-footer {
      padding: 8px 16px 12px;
      font-size: 0.8rem;
      color: var(--muted);
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 8px;
    }

    .tone-btn {
      border-radius: 999px;
      border: 1px solid rgba(139, 147, 167, 0.4);
      background: transparent;
      color: var(--muted);
      padding: 4px 10px;
      font-size: 0.75rem;
      cursor: pointer;
    }

    .tone-active {
      border-color: var(--accent);
      color: var(--accent);
    }

    @keyframes rise {
      from { opacity: 0; transform: translateY(18px); }
      to { opacity: 1; transform: translateY(0); }
    }
  </style>
</head>
<body>
  <div class="app">
    <header>
      <div class="avatar-circle">{{INITIALS}}</div>
      <div>
        <h1 class="greeting">Good Morning, {{FIRST_NAME}}</h1>
        <p class="streak">Streak: {{STREAK}} days</p>
      </div>
    </header>

    <nav>
      <button class="nav-item nav-item-active" data-screen-target="today">Today</button>
      <button class="nav-item" data-screen-target="health">Health</button>
      <button class="nav-item" data-screen-target="style">Style</button>
      <button class="nav-item" data-screen-target="money">Money</button>
    </nav>

    <section class="screen screen-active" data-screen="today">
      <div class="card">
        <h2>Life score</h2>
        <span class="score" id="lifeScore">--</span>
        <p class="card-sub">Steps, water, and sleep against your goals.</p>
      </div>
      <div class="card">
        <h2>Environment</h2>
        <p class="card-sub" id="envWhere">Checking sensors...</p>
        <div class="pill-row">
          <span class="pill" id="envUv"></span>
          <span class="pill" id="envTemp"></span>
          <span class="pill" id="envSun"></span>
        </div>
      </div>
      <div class="card">
        <h2>Money this week</h2>
        <span class="money-value" id="todayMoney">--</span>
        <p class="card-sub" id="todayMoneySub"></p>
      </div>
    </section>

    <section class="screen" data-screen="health">
      <div class="tabs">
        <button class="tab tab-active" data-tab="hydration">Hydration</button>
        <button class="tab" data-tab="food">Food</button>
        <button class="tab" data-tab="conditions">Conditions</button>
      </div>

      <div class="tab-content tab-content-active" data-tab-content="hydration">
        <div class="card">
          <h2>Water</h2>
          <p class="card-sub hydration-text" id="hydrationText"></p>
          <p class="card-sub" id="hydrationNote"></p>
          <form class="inline" id="waterForm">
            <button class="btn-primary" type="submit">Log 1 glass</button>
            <input type="number" id="waterCustom" min="1" step="1" placeholder="glasses" />
            <button class="chip" type="button" id="waterCustomBtn">Log custom</button>
          </form>
        </div>
      </div>

      <div class="tab-content" data-tab-content="food">
        <div class="card">
          <h2>Sugar &amp; carbs</h2>
          <div class="meter">
            <div class="meter-label"><span>Sugar</span><span id="sugarValue"></span></div>
            <div class="meter-track"><div class="meter-fill" id="sugarFill"></div></div>
          </div>
          <div class="meter">
            <div class="meter-label"><span>Carbs</span><span id="carbValue"></span></div>
            <div class="meter-track"><div class="meter-fill" id="carbFill"></div></div>
          </div>
        </div>
        <div class="card">
          <h2>Meals</h2>
          <ul class="list" id="mealList"></ul>
          <form class="inline" id="mealForm">
            <input id="mealDesc" placeholder="What did you eat?" />
            <input id="mealSugar" type="number" min="0" step="1" placeholder="sugar g" />
            <input id="mealCarbs" type="number" min="0" step="1" placeholder="carbs g" />
            <button class="btn-primary" type="submit">Log meal</button>
          </form>
        </div>
      </div>

      <div class="tab-content" data-tab-content="conditions">
        <div class="card">
          <h2>Condition support</h2>
          <p class="card-sub">Tap to toggle what the coach accounts for.</p>
          <div class="pill-row">
            <button class="pill pill-toggle" data-condition="kidneySupport"></button>
            <button class="pill pill-toggle" data-condition="weightLoss"></button>
            <button class="pill pill-toggle" data-condition="diabetes"></button>
          </div>
        </div>
      </div>
    </section>

    <section class="screen" data-screen="style">
      <div class="card">
        <h2>Dress for</h2>
        <div class="pill-row" id="contextChips">
          <button class="chip" data-context="work">Work</button>
          <button class="chip" data-context="gym">Gym</button>
          <button class="chip" data-context="casual">Casual</button>
          <button class="chip" data-context="date">Date</button>
          <button class="chip" data-context="event">Event</button>
        </div>
      </div>
      <div class="card">
        <h2>Weather</h2>
        <p class="card-sub" id="styleWeather"></p>
        <form class="inline" id="weatherForm">
          <input id="weatherZip" placeholder="ZIP code" />
          <button class="btn-primary" type="submit">Check live weather</button>
        </form>
        <p class="card-sub" id="weatherLive"></p>
      </div>
      <div class="card">
        <h2 id="outfitLabel">Today's outfit</h2>
        <ul class="list" id="outfitList"></ul>
      </div>
    </section>

    <section class="screen" data-screen="money">
      <div class="card">
        <h2>This week</h2>
        <span class="money-value" id="weekTotal">--</span>
        <span class="money-diff" id="weekDiff"></span>
        <p class="card-sub" id="weekLimit"></p>
      </div>
      <div class="card">
        <h2>Quick add</h2>
        <div class="pill-row" id="quickAddChips">
          <button class="chip" data-category="Groceries">+ Groceries</button>
          <button class="chip" data-category="Eating out">+ Eating out</button>
          <button class="chip" data-category="Gas / transport">+ Gas</button>
          <button class="chip" data-category="Other">+ Other</button>
        </div>
        <form class="inline" id="txForm">
          <input id="txCategory" placeholder="category" />
          <input id="txAmount" type="number" min="0.01" step="0.01" placeholder="amount" />
          <button class="btn-primary" type="submit">Add expense</button>
        </form>
      </div>
      <div class="card">
        <h2>Categories</h2>
        <ul class="list" id="categoryList"></ul>
      </div>
    </section>

    <p class="status" id="status"></p>
  </div>

  <button class="ask-ai-fab" id="askAiBtn">Ask AI</button>

  <div class="ask-ai-panel" id="askAiPanel">
    <div class="ask-ai-header">
      <strong>Coach</strong>
      <button id="askAiClose" title="Close">&times;</button>
    </div>
    <div class="ask-ai-messages" id="askAiMessages"></div>
    <div class="ask-ai-compose">
      <input id="askAiInput" placeholder="Ask about health, money, style..." />
      <button class="btn-primary" id="askAiSend">Send</button>
    </div>
    <div class="ask-ai-footer">
      <span id="askAiQuota"></span>
      <span>
        <button class="tone-btn tone-active" data-tone="coach">Coach</button>
        <button class="tone-btn" data-tone="gentle">Gentle</button>
      </span>
    </div>
  </div>

  <script>
    let appState = null;

    const statusEl = document.getElementById('status');

    const setStatus = (message, kind) => {
      statusEl.textContent = message;
      statusEl.className = kind ? 'status ' + kind : 'status';
    };

    const clamp = (num, min, max) => Math.min(max, Math.max(min, num));

    const formatMoney = (amount) => {
      const sign = amount < 0 ? '-' : '';
      return sign + '$' + Math.abs(amount).toFixed(0);
    };

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    const post = (path, body) =>
      api(path, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });

    const applyState = (state) => {
      appState = state;
      renderToday();
      renderHealth();
      renderStyle();
      renderMoney();
      renderAi();
    };

    const mutate = (path, body) =>
      post(path, body)
        .then(applyState)
        .then(() => setStatus('Saved', 'ok'))
        .then(() => setTimeout(() => setStatus('', ''), 1200))
        .catch((err) => setStatus(err.message, 'error'));

    /* ---- renderers ---- */

    const renderToday = () => {
      const { health, money, goals } = appState;
      const steps = health.steps.walk + health.steps.jog + health.steps.run;
      const avg =
        (steps / goals.stepsPerDay +
          health.hydration.glasses / goals.waterGlassesPerDay +
          health.sleepHours / 8) / 3;
      document.getElementById('lifeScore').textContent =
        Math.round(clamp(avg * 100, 0, 100));

      const env = health.environment;
      document.getElementById('envWhere').textContent = env.inside
        ? "You're currently inside."
        : "You're currently outside.";
      const uvTier = env.uvIndex >= 7 ? 'High' : env.uvIndex >= 3 ? 'Moderate' : 'Low';
      document.getElementById('envUv').textContent = 'UV ' + env.uvIndex + ' · ' + uvTier;
      document.getElementById('envTemp').textContent = env.temperatureF + '°F';
      document.getElementById('envSun').textContent =
        env.minutesInSun > 15 ? 'Hydrate now' : "You're okay";

      document.getElementById('todayMoney').textContent = formatMoney(money.thisWeekTotal);
      document.getElementById('todayMoneySub').textContent =
        "You're " + formatMoney(money.deltaFromLastWeek) + " over last week's pace.";
    };

    const renderHealth = () => {
      const { health, goals } = appState;

      document.getElementById('hydrationText').textContent =
        health.hydration.glasses + ' / ' + goals.waterGlassesPerDay + ' glasses';
      const remaining = Math.max(goals.waterGlassesPerDay - health.hydration.glasses, 0);
      document.getElementById('hydrationNote').textContent = remaining > 0
        ? "You're " + remaining + ' glass' + (remaining === 1 ? '' : 'es') + ' short of your goal. Take one now.'
        : "You've hit your water goal. Nicely done.";

      const meter = (fillId, valueId, grams, cap) => {
        const fill = document.getElementById(fillId);
        fill.style.width = clamp((grams / cap) * 100, 0, 100) + '%';
        fill.classList.toggle('over', grams > cap);
        document.getElementById(valueId).textContent = grams + 'g / ' + cap + 'g';
      };
      meter('sugarFill', 'sugarValue', health.sugar.grams, health.sugar.dailyCap);
      meter('carbFill', 'carbValue', health.carbs.grams, health.carbs.dailyCap);

      const mealList = document.getElementById('mealList');
      mealList.innerHTML = '';
      health.meals.forEach((meal) => {
        const li = document.createElement('li');
        const title = document.createElement('span');
        const sub = document.createElement('span');
        title.textContent = meal.type + ' · ' + meal.description + (meal.flagged ? ' ⚠' : '');
        sub.className = 'list-sub';
        sub.textContent = meal.sugar + 'g sugar · ' + meal.carbs + 'g carbs';
        li.appendChild(title);
        li.appendChild(sub);
        mealList.appendChild(li);
      });

      const labels = {
        kidneySupport: 'Kidney Support',
        weightLoss: 'Weight Loss',
        diabetes: 'Diabetes'
      };
      document.querySelectorAll('.pill-toggle').forEach((pill) => {
        const key = pill.dataset.condition;
        const on = appState.health.conditions[key];
        pill.textContent = labels[key] + ': ' + (on ? 'ON' : 'OFF');
        pill.classList.toggle('pill-on', on);
      });
    };

    const renderStyle = () => {
      const { style } = appState;
      document.getElementById('styleWeather').textContent =
        style.weather.tempF + '°F · ' + style.weather.condition + ' · UV ' + style.weather.uvIndex;

      document.querySelectorAll('#contextChips .chip').forEach((chip) => {
        chip.classList.toggle('chip-active', chip.dataset.context === style.activeContext);
      });

      document.getElementById('outfitLabel').textContent = style.todaysOutfit.label;
      const list = document.getElementById('outfitList');
      list.innerHTML = '';
      style.todaysOutfit.items.forEach((item) => {
        const li = document.createElement('li');
        const title = document.createElement('span');
        const sub = document.createElement('span');
        title.textContent = item.name;
        sub.className = 'list-sub';
        sub.textContent = item.description;
        li.appendChild(title);
        li.appendChild(sub);
        list.appendChild(li);
      });
    };

    const renderMoney = () => {
      const { money, goals } = appState;
      document.getElementById('weekTotal').textContent = formatMoney(money.thisWeekTotal);
      const diff = document.getElementById('weekDiff');
      diff.textContent =
        (money.deltaFromLastWeek >= 0 ? '+' : '') + formatMoney(money.deltaFromLastWeek) + ' vs last week';
      diff.classList.toggle('money-diff-bad', money.thisWeekTotal > goals.weeklySpendLimit);
      document.getElementById('weekLimit').textContent =
        'Weekly limit: ' + formatMoney(goals.weeklySpendLimit);

      const list = document.getElementById('categoryList');
      list.innerHTML = '';
      money.categories.forEach((cat) => {
        const li = document.createElement('li');
        const title = document.createElement('span');
        const sub = document.createElement('span');
        title.textContent = cat.name;
        sub.className = 'list-sub';
        sub.textContent = formatMoney(cat.amount);
        li.appendChild(title);
        li.appendChild(sub);
        list.appendChild(li);
      });
    };

    const renderAi = () => {
      const { ai } = appState;
      const container = document.getElementById('askAiMessages');
      container.innerHTML = '';
      ai.messages.forEach((msg) => {
        const div = document.createElement('div');
        div.className = 'msg ' + (msg.from === 'user' ? 'msg-user' : 'msg-ai');
        msg.text.split('\n').forEach((line) => {
          if (line.trim().startsWith('•')) {
            let ul = div.querySelector('ul');
            if (!ul) {
              ul = document.createElement('ul');
              div.appendChild(ul);
            }
            const li = document.createElement('li');
            li.textContent = line.replace(/^[•\-\*]\s*/, '');
            ul.appendChild(li);
          } else if (line.trim().length > 0) {
            const p = document.createElement('p');
            p.textContent = line;
            div.appendChild(p);
          }
        });
        container.appendChild(div);
      });
      container.scrollTop = container.scrollHeight;

      const quota = document.getElementById('askAiQuota');
      quota.textContent = ai.freeQuestionsLeft > 0
        ? ai.freeQuestionsLeft + ' free question' + (ai.freeQuestionsLeft === 1 ? '' : 's') + ' left'
        : 'No free questions left · Upgrade for unlimited';

      document.querySelectorAll('.tone-btn').forEach((btn) => {
        btn.classList.toggle('tone-active', btn.dataset.tone === ai.tone);
      });
    };

    /* ---- wiring ---- */

    document.querySelectorAll('.nav-item').forEach((btn) => {
      btn.addEventListener('click', () => {
        const target = btn.dataset.screenTarget;
        document.querySelectorAll('.screen').forEach((screen) => {
          screen.classList.toggle('screen-active', screen.dataset.screen === target);
        });
        document.querySelectorAll('.nav-item').forEach((nav) =>
          nav.classList.remove('nav-item-active'));
        btn.classList.add('nav-item-active');
      });
    });

    document.querySelectorAll('.tab').forEach((tab) => {
      tab.addEventListener('click', () => {
        const target = tab.dataset.tab;
        document.querySelectorAll('.tab').forEach((t) => t.classList.remove('tab-active'));
        document.querySelectorAll('.tab-content').forEach((c) => {
          c.classList.toggle('tab-content-active', c.dataset.tabContent === target);
        });
        tab.classList.add('tab-active');
      });
    });

    document.getElementById('waterForm').addEventListener('submit', (event) => {
      event.preventDefault();
      mutate('/api/health/water', { glasses: 1 });
    });

    document.getElementById('waterCustomBtn').addEventListener('click', () => {
      const val = parseInt(document.getElementById('waterCustom').value, 10);
      if (isNaN(val) || val <= 0) {
        setStatus('Enter a positive number of glasses.', 'error');
        return;
      }
      mutate('/api/health/water', { glasses: val });
    });

    document.getElementById('mealForm').addEventListener('submit', (event) => {
      event.preventDefault();
      const description = document.getElementById('mealDesc').value.trim();
      const sugar = parseInt(document.getElementById('mealSugar').value, 10) || 0;
      const carbs = parseInt(document.getElementById('mealCarbs').value, 10) || 0;
      if (!description) {
        setStatus('Describe the meal first.', 'error');
        return;
      }
      const time = new Date().toLocaleTimeString([], { hour: 'numeric', minute: '2-digit' });
      mutate('/api/health/meals', {
        type: 'Meal', time, description, sugar, carbs,
        flagged: sugar >= 25
      });
    });

    document.querySelectorAll('.pill-toggle').forEach((pill) => {
      pill.addEventListener('click', () => {
        mutate('/api/health/conditions', { name: pill.dataset.condition });
      });
    });

    document.querySelectorAll('#contextChips .chip').forEach((chip) => {
      chip.addEventListener('click', () => {
        mutate('/api/style/context', { context: chip.dataset.context });
      });
    });

    document.getElementById('weatherForm').addEventListener('submit', async (event) => {
      event.preventDefault();
      const zip = document.getElementById('weatherZip').value.trim();
      const live = document.getElementById('weatherLive');
      if (!zip) {
        setStatus('Enter a ZIP code.', 'error');
        return;
      }
      live.textContent = 'Loading...';
      try {
        const report = await api('/api/weather?zip=' + encodeURIComponent(zip));
        live.textContent = 'Live: ' + report.tempF + '°F · ' + report.condition +
          ' · ' + report.humidity + '% humidity · ' + report.windMph + ' mph wind';
      } catch (err) {
        live.textContent = err.message;
      }
    });

    document.querySelectorAll('#quickAddChips .chip').forEach((chip) => {
      chip.addEventListener('click', () => {
        document.getElementById('txCategory').value = chip.dataset.category;
        document.getElementById('txAmount').focus();
      });
    });

    document.getElementById('txForm').addEventListener('submit', (event) => {
      event.preventDefault();
      const category = document.getElementById('txCategory').value.trim();
      const amount = parseFloat(document.getElementById('txAmount').value);
      if (!category || isNaN(amount) || amount <= 0) {
        setStatus('Enter a category and a positive amount.', 'error');
        return;
      }
      mutate('/api/money/transactions', { category, amount });
    });

    /* ---- Ask AI ---- */

    const panel = document.getElementById('askAiPanel');
    const input = document.getElementById('askAiInput');

    document.getElementById('askAiBtn').addEventListener('click', () => {
      panel.classList.add('ask-ai-open');
      input.focus();
    });

    document.getElementById('askAiClose').addEventListener('click', () => {
      panel.classList.remove('ask-ai-open');
    });

    const sendQuestion = async () => {
      const question = input.value.trim();
      if (!question) return;
      input.value = '';
      try {
        await post('/api/ai/ask', { question });
        applyState(await api('/api/state'));
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    document.getElementById('askAiSend').addEventListener('click', sendQuestion);
    input.addEventListener('keydown', (event) => {
      if (event.key === 'Enter') {
        event.preventDefault();
        sendQuestion();
      }
    });

    document.querySelectorAll('.tone-btn').forEach((btn) => {
      btn.addEventListener('click', () => {
        mutate('/api/ai/tone', { tone: btn.dataset.tone });
      });
    });

    /* ---- boot ---- */

    api('/api/state')
      .then(applyState)
      .catch((err) => setStatus(err.message, 'error'));

    setInterval(() => {
      api('/api/state').then(applyState).catch(() => {});
    }, 40000);
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppState;

    #[test]
    fn render_fills_every_placeholder() {
        let html = render_index(&AppState::default());
        assert!(!html.contains("{{"));
        assert!(html.contains("Good Morning, Joseph"));
        assert!(html.contains("Streak: 6 days"));
    }
}
